//! Costume Modal
//!
//! Pop-up with an outfit's title, description and image strip. Clicking an
//! image opens it in the image modal on top.

use std::collections::HashSet;

use dioxus::prelude::*;

use crate::context::use_archive;

#[component]
pub fn CostumeModal() -> Element {
    let archive = use_archive();
    let mut broken: Signal<HashSet<&'static str>> = use_signal(HashSet::new);

    let Some(entry) = archive.costume.read().current() else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "costume-modal",
            class: "costume-modal active",
            onclick: move |_| archive.close_costume(),

            div {
                class: "costume-content",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "costume-close",
                    onclick: move |_| archive.close_costume(),
                    "×"
                }
                h3 { class: "costume-title", "{entry.title}" }
                p { class: "costume-desc", "{entry.description}" }

                div { class: "costume-gallery",
                    for src in entry.images.iter().copied().filter(|src| !broken.read().contains(src)) {
                        div {
                            key: "{src}",
                            class: "costume-img-item",
                            onclick: move |_| archive.open_src(src),
                            img {
                                src: "{src}",
                                alt: "{entry.title}",
                                onerror: move |_| {
                                    broken.write().insert(src);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
