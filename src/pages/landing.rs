//! Landing menu - entry point to the archive.
//!
//! One card per view. Scrolling down past the hero also opens the timeline
//! (handled by the page listeners).

use dioxus::prelude::*;
use dossier_core::View;

use crate::context::use_archive;

/// Card blurb for each menu entry.
fn blurb(view: View) -> &'static str {
    match view {
        View::Story => "1980 - 2013 · 十二个节点",
        View::Profiles => "FILE NO. 8008-C / 8308-Q",
        View::Gallery => "影像资料 · 服装档案",
        View::Messages => "给他们留一句话",
        View::Landing => "",
    }
}

#[component]
pub fn LandingMenu() -> Element {
    let archive = use_archive();
    let visible = archive.views.read().landing_visible();

    rsx! {
        section {
            id: "landing-menu",
            class: if visible { "landing-menu" } else { "landing-menu hidden" },

            header { class: "landing-hero",
                p { class: "hero-label", "CLASSIFIED · 档案编号 8008-C / 8308-Q" }
                h1 { class: "hero-title", "囚城与雀" }
                p { class: "hero-tagline", "高城 · 高雀 兄妹档案馆" }
            }

            div { class: "menu-grid",
                for (number, view) in View::TABS.into_iter().enumerate() {
                    button {
                        key: "{view}",
                        class: "menu-card",
                        onclick: move |_| archive.switch_tab(view),
                        span { class: "menu-number", "0{number + 1}" }
                        span { class: "menu-title", "{view.label()}" }
                        span { class: "menu-blurb", "{blurb(view)}" }
                    }
                }
            }

            p { class: "scroll-hint", "向下滚动进入档案 ↓" }
        }
    }
}
