//! Guestbook view ("战地留言板").
//!
//! Message markup comes from the core renderer, which escapes every
//! visitor-supplied field, and is injected as inner HTML.

use dioxus::prelude::*;
use dossier_core::guestbook::MAX_CONTENT_CHARS;
use dossier_core::View;

use crate::context::use_archive;

#[component]
pub fn MessagesView() -> Element {
    let archive = use_archive();
    let mut sender = use_signal(String::new);
    let mut content = use_signal(String::new);

    let active = archive.views.read().is_active(View::Messages);
    let book = archive.guestbook.read();
    let total = book.total_count();
    let presets = book.render_presets();
    let entries = book.render_all();
    drop(book);

    let char_count = content.read().chars().count();
    let counter_class = if char_count > MAX_CONTENT_CHARS {
        "char-count over"
    } else {
        "char-count"
    };

    let submit = move |_| {
        if archive.submit_message(&sender.peek(), &content.peek()) {
            sender.set(String::new());
            content.set(String::new());
        }
    };

    rsx! {
        section {
            id: "messages-view",
            class: if active { "view messages-view active" } else { "view messages-view" },

            header { class: "view-header",
                h2 { class: "view-title", "战地留言板" }
                p { id: "total-messages", class: "message-count",
                    "已收录 "
                    strong { "{total}" }
                    " 条留言"
                }
            }

            div { id: "messages-list", class: "messages-list",
                for (i, markup) in presets.into_iter().enumerate() {
                    div { key: "preset-{i}", dangerous_inner_html: "{markup}" }
                }
                for (i, markup) in entries.into_iter().enumerate() {
                    div { key: "entry-{i}", dangerous_inner_html: "{markup}" }
                }
            }

            div { class: "message-form",
                input {
                    id: "sender-name",
                    class: "input",
                    r#type: "text",
                    placeholder: "你的名字（可留空）",
                    maxlength: 20,
                    value: "{sender}",
                    oninput: move |e| sender.set(e.value()),
                }
                textarea {
                    id: "message-content",
                    class: "input",
                    placeholder: "写下你想说的话...",
                    rows: 4,
                    value: "{content}",
                    oninput: move |e| content.set(e.value()),
                }
                div { class: "form-footer",
                    span { class: "{counter_class}",
                        span { id: "char-current", "{char_count}" }
                        " / {MAX_CONTENT_CHARS}"
                    }
                    button { class: "btn-submit", onclick: submit, "发送留言" }
                }
            }
        }
    }
}
