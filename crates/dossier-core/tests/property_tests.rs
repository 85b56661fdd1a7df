//! Property-based tests for the guestbook and gallery
//!
//! Uses proptest to verify invariants of submission, rendering and modal
//! navigation.

use chrono::{FixedOffset, TimeZone};
use dossier_core::guestbook::{
    escape_html, render, ANONYMOUS_SENDER, MAX_CONTENT_CHARS, PRESET_ENTRIES,
};
use dossier_core::{EntryStore, GalleryState, Guestbook, GuestbookEntry, MemoryStore};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Content that is already trimmed and within the limit
fn valid_content_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9<>&\"'高城雀测试留言]{1,500}").expect("valid regex")
}

/// Sender names, including blank and padded ones
fn sender_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ a-zA-Z高城雀]{0,20}").expect("valid regex")
}

fn too_long_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z字]{501,600}").expect("valid regex")
}

fn blank_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n]{0,20}").expect("valid regex")
}

fn fixed_now() -> chrono::DateTime<FixedOffset> {
    FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 5, 1, 12, 30, 0)
        .unwrap()
}

/// Undo `escape_html`
fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Pull the text between `open` and the next `</...>` close tag
fn segment<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
    let start = html.find(open).expect("open tag present") + open.len();
    let end = html[start..].find(close).expect("close tag present") + start;
    &html[start..end]
}

// ============================================================================
// Guestbook Properties
// ============================================================================

proptest! {
    /// Valid content is stored verbatim and blank senders get the placeholder
    #[test]
    fn submit_preserves_content(sender in sender_strategy(), content in valid_content_strategy()) {
        let backend = MemoryStore::new();
        let mut book = Guestbook::new(&backend);

        let entry = book.submit_at(&sender, &content, &fixed_now()).unwrap();
        prop_assert_eq!(&entry.content, &content);

        let expected_sender = match sender.trim() {
            "" => ANONYMOUS_SENDER,
            trimmed => trimmed,
        };
        prop_assert_eq!(entry.sender.as_str(), expected_sender);
        prop_assert_eq!(EntryStore::new(&backend).load_entries(), vec![entry]);
    }

    /// Over-long content never reaches storage
    #[test]
    fn too_long_never_mutates(seed in prop::collection::vec(valid_content_strategy(), 0..3), long in too_long_strategy()) {
        let backend = MemoryStore::new();
        let mut book = Guestbook::new(&backend);
        for content in &seed {
            book.submit_at("", content, &fixed_now()).unwrap();
        }
        let before = EntryStore::new(&backend).load_entries();

        prop_assert!(long.chars().count() > MAX_CONTENT_CHARS);
        prop_assert!(book.submit_at("x", &long, &fixed_now()).is_err());
        prop_assert_eq!(EntryStore::new(&backend).load_entries(), before);
    }

    /// Blank content never reaches storage
    #[test]
    fn blank_never_mutates(sender in sender_strategy(), blank in blank_strategy()) {
        let backend = MemoryStore::new();
        let mut book = Guestbook::new(&backend);

        prop_assert!(book.submit_at(&sender, &blank, &fixed_now()).is_err());
        prop_assert!(backend.is_empty());
    }

    /// The displayed count is always stored entries plus the presets
    #[test]
    fn total_count_tracks_storage(contents in prop::collection::vec(valid_content_strategy(), 0..10)) {
        let backend = MemoryStore::new();
        let mut book = Guestbook::new(&backend);

        for content in &contents {
            book.submit_at("", content, &fixed_now()).unwrap();
            let stored = EntryStore::new(&backend).load_entries().len();
            prop_assert_eq!(book.total_count(), stored + PRESET_ENTRIES.len());
        }
        prop_assert_eq!(book.total_count(), contents.len() + 3);
    }

    /// Rendered fields carry no markup and unescape back to the input
    #[test]
    fn render_escapes_untrusted_fields(sender in ".{1,40}", content in ".{1,200}") {
        let entry = GuestbookEntry {
            id: 1,
            sender: sender.clone(),
            content: content.clone(),
            time: "2024.05.01 12:30".to_string(),
        };
        let html = render(&entry);

        let rendered_content = segment(&html, r#"<div class="message-text">"#, "</div>");
        prop_assert!(!rendered_content.contains('<'));
        prop_assert!(!rendered_content.contains('>'));
        prop_assert_eq!(unescape_html(rendered_content), content);

        let rendered_sender = segment(&html, r#"<span class="sender-name">"#, "</span>");
        prop_assert!(!rendered_sender.contains('<'));
        prop_assert_eq!(unescape_html(rendered_sender), sender);
    }

    /// escape_html is reversible
    #[test]
    fn escape_roundtrip(text in ".{0,200}") {
        prop_assert_eq!(unescape_html(&escape_html(&text)), text);
    }
}

// ============================================================================
// Gallery Properties
// ============================================================================

proptest! {
    /// next() then prev() returns to the starting position, including at the edges
    #[test]
    fn next_prev_are_inverse(start in 0usize..61) {
        let mut gallery = GalleryState::new();
        gallery.ensure_built();
        prop_assert!(start < gallery.len());

        gallery.open_at(start);
        gallery.next();
        gallery.prev();
        prop_assert_eq!(gallery.position(), Some(start));

        gallery.prev();
        gallery.next();
        prop_assert_eq!(gallery.position(), Some(start));
    }

    /// Out-of-range opens leave the position alone
    #[test]
    fn open_out_of_range_is_noop(start in 0usize..61, offset in 0usize..1000) {
        let mut gallery = GalleryState::new();
        gallery.ensure_built();
        gallery.open_at(start);

        prop_assert!(gallery.open_at(gallery.len() + offset).is_none());
        prop_assert_eq!(gallery.position(), Some(start));
    }
}

#[test]
fn gallery_build_is_idempotent() {
    let mut first = GalleryState::new();
    first.ensure_built();
    first.ensure_built();

    let mut second = GalleryState::new();
    second.ensure_built();

    assert_eq!(first.index(), second.index());
    assert_eq!(first.len(), 61);
}
