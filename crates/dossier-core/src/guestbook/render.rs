//! Guestbook markup rendering
//!
//! Every field that can come from a visitor (sender, content, and anything
//! else read back from storage) is entity-encoded before it is placed in
//! markup. Storage is writable by anyone with the page open, so nothing read
//! from it is trusted.

use super::entry::{GuestbookEntry, PresetEntry};
use super::ANONYMOUS_SENDER;

/// Avatar glyph used when an entry has no sender
pub const ANONYMOUS_AVATAR: char = '匿';

/// Footer tag shown under visitor messages
pub const MESSAGE_TAG: &str = "📍 档案馆留言";

/// Display-ready view of an entry. Fields are raw text; [`RenderedEntry::to_html`]
/// does the escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub avatar: char,
    /// Sender matches the primary character (gets the highlighted avatar)
    pub is_primary_character: bool,
    pub sender: String,
    pub content: String,
    pub time: String,
}

impl RenderedEntry {
    pub fn from_entry(entry: &GuestbookEntry) -> Self {
        let avatar = entry.sender.chars().next().unwrap_or(ANONYMOUS_AVATAR);
        let sender = if entry.sender.is_empty() {
            ANONYMOUS_SENDER.to_string()
        } else {
            entry.sender.clone()
        };

        Self {
            avatar,
            is_primary_character: is_primary_character(&entry.sender),
            sender,
            content: entry.content.clone(),
            time: entry.time.clone(),
        }
    }

    /// CSS classes for the avatar element.
    pub fn avatar_class(&self) -> &'static str {
        if self.is_primary_character {
            "message-avatar gc"
        } else {
            "message-avatar"
        }
    }

    /// Markup fragment for a visitor message.
    pub fn to_html(&self) -> String {
        self.markup("message-item user-message", Some(MESSAGE_TAG))
    }

    /// Markup fragment for a built-in message: `preset` class, no visitor tag.
    pub fn to_preset_html(&self) -> String {
        self.markup("message-item preset", None)
    }

    fn markup(&self, item_class: &str, tag: Option<&str>) -> String {
        let mut avatar = [0u8; 4];
        let tag = tag
            .map(|tag| format!(r#"<div class="message-tag">{}</div>"#, escape_html(tag)))
            .unwrap_or_default();
        format!(
            concat!(
                r#"<div class="{item_class}">"#,
                r#"<div class="{avatar_class}">{avatar}</div>"#,
                r#"<div class="message-body">"#,
                r#"<div class="message-meta">"#,
                r#"<span class="sender-name">{sender}</span>"#,
                r#"<span class="message-time">{time}</span>"#,
                r#"</div>"#,
                r#"<div class="message-text">{content}</div>"#,
                "{tag}",
                r#"</div>"#,
                r#"</div>"#,
            ),
            item_class = item_class,
            avatar_class = self.avatar_class(),
            avatar = escape_html(self.avatar.encode_utf8(&mut avatar)),
            sender = escape_html(&self.sender),
            time = escape_html(&self.time),
            content = escape_html(&self.content),
            tag = tag,
        )
    }
}

/// Render an entry straight to markup.
pub fn render(entry: &GuestbookEntry) -> String {
    RenderedEntry::from_entry(entry).to_html()
}

/// Render a built-in message to markup.
pub fn render_preset(preset: &PresetEntry) -> String {
    RenderedEntry::from_entry(&preset.to_entry()).to_preset_html()
}

/// Whether a sender name marks the primary character (高城, alias "gc").
///
/// This is a plain substring test on a visitor-supplied name, so anyone can
/// claim it.
pub fn is_primary_character(sender: &str) -> bool {
    !sender.is_empty() && (sender.contains('城') || sender.to_lowercase().contains("gc"))
}

/// Entity-encode the characters that are significant in HTML text and
/// attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
