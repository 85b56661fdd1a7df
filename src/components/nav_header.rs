//! Navigation Header Component
//!
//! Fixed bar shown once the landing menu is gone: archive title on the left
//! (back to the landing menu), one tab per view on the right.

use dioxus::prelude::*;
use dossier_core::View;

use crate::context::use_archive;

#[component]
pub fn NavHeader() -> Element {
    let archive = use_archive();
    let views = archive.views.read();

    let header_class = if views.landing_visible() {
        "nav-header"
    } else {
        "nav-header visible"
    };
    let tabs: Vec<(View, bool)> = View::TABS
        .iter()
        .map(|view| (*view, views.is_active(*view)))
        .collect();
    drop(views);

    rsx! {
        header { class: "{header_class}",
            button {
                class: "nav-title",
                title: "返回首页 (Home)",
                onclick: move |_| archive.back_to_home(),
                "高城 · 高雀"
                span { class: "nav-subtitle", "ARCHIVE" }
            }

            nav { class: "nav-links",
                for (number, (view, active)) in tabs.into_iter().enumerate() {
                    button {
                        key: "{view}",
                        class: if active { "nav-link active" } else { "nav-link" },
                        onclick: move |_| archive.switch_tab(view),
                        span { class: "nav-key", "{number + 1}" }
                        "{view.label()}"
                    }
                }
            }
        }
    }
}
