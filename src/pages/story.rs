//! Story timeline view.
//!
//! Each node's card opens on hover (mouse) or tap (touch) and closes after a
//! short grace period, so the pointer can travel from node to card. The
//! "reveal all" button opens every card at once.

use dioxus::prelude::*;
use dossier_core::timeline::{HoverRelease, STORY_NODES};
use dossier_core::View;

use crate::context::{sleep, use_archive};

#[component]
pub fn StoryView() -> Element {
    let archive = use_archive();
    let mut timeline = archive.timeline;
    let touch = archive.touch;

    let active = archive.views.read().is_active(View::Story);
    let state = timeline.read();
    let wrapper_class = if state.reveal_all() {
        "timeline-wrapper reveal-all"
    } else {
        "timeline-wrapper"
    };
    let button_class = if state.reveal_all() {
        "reveal-all-btn active"
    } else {
        "reveal-all-btn"
    };
    let label = state.reveal_label();
    let hover: Vec<bool> = (0..STORY_NODES.len()).map(|i| state.is_active(i)).collect();
    drop(state);

    let reveal = archive.reveal.read();
    let seen: Vec<(bool, bool)> = STORY_NODES
        .iter()
        .enumerate()
        .map(|(i, _)| {
            (
                reveal.is_visible(&format!("year-{}", i)),
                reveal.is_visible(&format!("node-{}", i)),
            )
        })
        .collect();
    drop(reveal);

    // Hide the card once the grace period passes, unless the pointer returned
    let schedule_release = move |release: Option<HoverRelease>| {
        if let Some(release) = release {
            spawn(async move {
                sleep(release.delay).await;
                timeline.write().release(release);
            });
        }
    };

    rsx! {
        section {
            id: "story-view",
            class: if active { "view story-view active" } else { "view story-view" },

            header { class: "view-header",
                h2 { class: "view-title", "时间线" }
                button {
                    class: "{button_class}",
                    onclick: move |_| {
                        timeline.write().toggle_reveal_all();
                    },
                    span { class: "btn-text", "{label}" }
                    span { class: "btn-key", "R" }
                }
            }

            div { class: "{wrapper_class}",
                for (i, node) in STORY_NODES.iter().enumerate() {
                    div { key: "{node.year}", class: "timeline-entry",
                        div {
                            class: if seen[i].0 { "year-marker animate-on-scroll visible" } else { "year-marker animate-on-scroll" },
                            "data-reveal": "year-{i}",
                            "{node.year}"
                        }
                        div {
                            class: format!(
                                "story-node animate-on-scroll{}{}",
                                if hover[i] { " hover-active" } else { "" },
                                if seen[i].1 { " visible" } else { "" },
                            ),
                            "data-reveal": "node-{i}",
                            onmouseenter: move |_| {
                                if !touch() {
                                    timeline.write().enter(i);
                                }
                            },
                            onmouseleave: move |_| {
                                if !touch() {
                                    schedule_release(timeline.write().leave_node(i));
                                }
                            },
                            onclick: move |_| {
                                if touch() {
                                    timeline.write().tap(i);
                                }
                            },

                            div { class: "node-dot" }
                            div { class: "node-title", "{node.title}" }
                            div {
                                class: "node-card",
                                onmouseenter: move |_| {
                                    if !touch() {
                                        timeline.write().enter(i);
                                    }
                                },
                                onmouseleave: move |_| {
                                    if !touch() {
                                        schedule_release(timeline.write().leave_card(i));
                                    }
                                },
                                onclick: move |e| e.stop_propagation(),
                                span { class: "card-year", "{node.year}" }
                                h3 { class: "card-title", "{node.title}" }
                                p { class: "card-summary", "{node.summary}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
