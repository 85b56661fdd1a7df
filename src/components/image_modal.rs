//! Image Modal
//!
//! Full-screen viewer over the gallery index. Arrow buttons wrap around;
//! a click on the backdrop closes it.

use dioxus::prelude::*;

use crate::context::use_archive;

#[component]
pub fn ImageModal() -> Element {
    let archive = use_archive();
    let mut gallery = archive.gallery;

    let state = gallery.read();
    let Some(src) = state.modal().src().map(str::to_string) else {
        return rsx! {};
    };
    let caption = state
        .current()
        .filter(|image| image.src == src)
        .map(|image| image.alt.clone());
    let counter = state
        .position()
        .filter(|_| caption.is_some())
        .map(|p| format!("{} / {}", p + 1, state.len()));
    drop(state);

    rsx! {
        div {
            id: "modal",
            class: "modal active",
            onclick: move |_| archive.close_image(),

            button {
                class: "modal-close",
                onclick: move |e| {
                    e.stop_propagation();
                    archive.close_image();
                },
                "×"
            }
            button {
                class: "modal-nav prev",
                onclick: move |e| {
                    e.stop_propagation();
                    gallery.write().prev();
                },
                "‹"
            }
            img {
                id: "modal-img",
                src: "{src}",
                onclick: move |e| e.stop_propagation(),
            }
            button {
                class: "modal-nav next",
                onclick: move |e| {
                    e.stop_propagation();
                    gallery.write().next();
                },
                "›"
            }
            if let Some(caption) = caption {
                div { class: "modal-caption",
                    span { "{caption}" }
                    if let Some(counter) = counter {
                        span { class: "modal-counter", "{counter}" }
                    }
                }
            }
        }
    }
}
