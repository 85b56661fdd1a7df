//! Character profiles view.

use dioxus::prelude::*;
use dossier_core::costume::lookup;
use dossier_core::{Character, View};

use crate::context::use_archive;

/// Static dossier card contents.
struct Profile {
    character: Character,
    file_no: &'static str,
    photo: &'static str,
    born: u16,
    facts: &'static [(&'static str, &'static str)],
}

static PROFILES: [Profile; 2] = [
    Profile {
        character: Character::Gc,
        file_no: "FILE NO. 8008-C",
        photo: "profile_gc.jpg",
        born: 1980,
        facts: &[
            ("军衔", "上尉 → 中校"),
            ("性格", "笔挺、一丝不苟"),
            ("关键词", "长子 · 联姻 · 守城"),
        ],
    },
    Profile {
        character: Character::Gq,
        file_no: "FILE NO. 8308-Q",
        photo: "profile_gq.jpg",
        born: 1983,
        facts: &[
            ("经历", "文工团 → 特种连"),
            ("性格", "飒爽、带一点叛逆"),
            ("关键词", "演出服 · 血舌 · 退役"),
        ],
    },
];

#[component]
pub fn ProfilesView() -> Element {
    let archive = use_archive();
    let active = archive.views.read().is_active(View::Profiles);

    rsx! {
        section {
            id: "profiles-view",
            class: if active { "view profiles-view active" } else { "view profiles-view" },

            header { class: "view-header",
                h2 { class: "view-title", "人物档案" }
            }

            div { class: "profile-grid",
                for profile in PROFILES.iter() {
                    article {
                        key: "{profile.character}",
                        class: "profile-card profile-{profile.character}",

                        div { class: "profile-photo",
                            img { src: "{profile.photo}", alt: "{profile.character.name()}" }
                            span { class: "file-no", "{profile.file_no}" }
                        }

                        div { class: "profile-body",
                            h3 { class: "profile-name", "{profile.character.name()}" }
                            p { class: "profile-born", "生于 {profile.born}" }
                            dl { class: "profile-facts",
                                for (term, detail) in profile.facts.iter() {
                                    dt { "{term}" }
                                    dd { "{detail}" }
                                }
                            }

                            div { class: "costume-buttons",
                                span { class: "costume-label", "服装档案" }
                                for outfit in profile.character.outfits().iter().copied() {
                                    if let Some(entry) = lookup(profile.character, outfit) {
                                        button {
                                            key: "{outfit}",
                                            class: "costume-btn",
                                            onclick: move |_| archive.open_costume(profile.character, outfit),
                                            "{entry.title}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
