//! Gallery view.
//!
//! Featured images on top, then the filterable grid. The index is built the
//! first time the view opens; until then only the header renders.

use std::collections::HashSet;

use dioxus::prelude::*;
use dossier_core::{Filter, ImageDescriptor, View};

use crate::context::use_archive;

#[component]
pub fn GalleryView() -> Element {
    let archive = use_archive();
    let mut gallery = archive.gallery;
    // Images that failed to load are dropped from the page
    let mut broken: Signal<HashSet<usize>> = use_signal(HashSet::new);

    let active = archive.views.read().is_active(View::Gallery);
    let state = gallery.read();
    let built = state.is_built();
    let current_filter = state.filter();
    let featured: Vec<(usize, ImageDescriptor)> =
        state.featured().map(|(i, image)| (i, image.clone())).collect();
    let grid: Vec<(usize, ImageDescriptor)> =
        state.grid().map(|(i, image)| (i, image.clone())).collect();
    drop(state);

    let hidden = broken.read();
    let featured: Vec<_> = featured.into_iter().filter(|(i, _)| !hidden.contains(i)).collect();
    let grid: Vec<_> = grid.into_iter().filter(|(i, _)| !hidden.contains(i)).collect();
    drop(hidden);

    rsx! {
        section {
            id: "gallery-view",
            class: if active { "view gallery-view active" } else { "view gallery-view" },

            header { class: "view-header",
                h2 { class: "view-title", "影像画廊" }
                div { class: "gallery-filters",
                    for filter in Filter::BUTTONS {
                        button {
                            key: "{filter}",
                            class: if filter == current_filter { "filter-btn active" } else { "filter-btn" },
                            onclick: move |_| gallery.write().set_filter(filter),
                            "{filter.label()}"
                        }
                    }
                }
            }

            if built {
                div { id: "featured-gallery", class: "featured-gallery",
                    for (index, image) in featured {
                        div {
                            key: "{image.src}",
                            class: "featured-item category-{image.category}",
                            onclick: move |_| archive.open_image(index),
                            img {
                                src: "{image.src}",
                                alt: "{image.alt}",
                                loading: "lazy",
                                onerror: move |_| {
                                    broken.write().insert(index);
                                },
                            }
                            div { class: "featured-overlay",
                                div { class: "featured-title", "{image.alt}" }
                                div { class: "featured-desc", {image.desc.clone().unwrap_or_default()} }
                            }
                        }
                    }
                }

                div { id: "dynamic-gallery", class: "gallery-grid",
                    for (index, image) in grid {
                        div {
                            key: "{image.src}",
                            class: "gallery-item category-{image.category}",
                            onclick: move |_| archive.open_image(index),
                            img {
                                src: "{image.src}",
                                alt: "{image.alt}",
                                loading: "lazy",
                                onerror: move |_| {
                                    broken.write().insert(index);
                                },
                            }
                            div { class: "gallery-item-overlay",
                                span { class: "gallery-item-title", "{image.alt}" }
                            }
                        }
                    }
                }
            } else {
                p { class: "gallery-loading", "档案调取中..." }
            }
        }
    }
}
