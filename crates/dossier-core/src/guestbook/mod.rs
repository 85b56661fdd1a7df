//! Browser-local guestbook ("战地留言板")
//!
//! # Flow
//!
//! **Submitting:**
//! 1. Inputs are trimmed; a blank sender becomes [`ANONYMOUS_SENDER`]
//! 2. Content is validated (non-empty, at most [`MAX_CONTENT_CHARS`])
//! 3. The full list is re-read from storage, the entry appended, and the
//!    whole list written back
//!
//! **Displaying:**
//! 1. [`PRESET_ENTRIES`] are part of the page and never stored
//! 2. Stored entries follow, rendered through [`render`] with every field
//!    escaped
//! 3. The count banner uses the stored count from the last open, reload or
//!    submit, so rendering never touches storage
//!
//! ```ignore
//! let mut book = Guestbook::new(MemoryStore::new());
//! let entry = book.submit("高城", "测试留言")?;
//! let markup = render(&entry);
//! assert_eq!(book.total_count(), 4);
//! ```

mod entry;
mod render;

pub use entry::{format_time, GuestbookEntry, PresetEntry, TIME_FORMAT};
pub use render::{
    escape_html, is_primary_character, render, render_preset, RenderedEntry, ANONYMOUS_AVATAR,
    MESSAGE_TAG,
};

use chrono::{DateTime, Local, TimeZone};

use crate::error::ValidationError;
use crate::storage::{EntryStore, KeyValueStore};

/// Sender name used when the visitor leaves the field blank
pub const ANONYMOUS_SENDER: &str = "匿名访客";

/// Content limit, in characters, after trimming
pub const MAX_CONTENT_CHARS: usize = 500;

/// Toast shown after a successful submission
pub const SUBMIT_SUCCESS_NOTICE: &str = "留言发送成功！";

/// Messages that are part of the page itself. They count toward the total but
/// never touch storage.
pub const PRESET_ENTRIES: [PresetEntry; 3] = [
    PresetEntry {
        sender: "高雀",
        content: "哥，这里的每一张照片我都记得。",
        time: "2013.06.12 23:41",
    },
    PresetEntry {
        sender: "高城",
        content: "档案封存。活着的人，继续往前走。",
        time: "2013.06.13 07:02",
    },
    PresetEntry {
        sender: "档案管理员",
        content: "欢迎来到档案馆。请文明留言。",
        time: "2013.06.13 09:00",
    },
];

/// Trim and validate raw form input.
///
/// Returns the `(sender, content)` pair that would be stored.
pub fn validate(sender_raw: &str, content_raw: &str) -> Result<(String, String), ValidationError> {
    let content = content_raw.trim();
    if content.is_empty() {
        return Err(ValidationError::EmptyContent);
    }

    let len = content.chars().count();
    if len > MAX_CONTENT_CHARS {
        return Err(ValidationError::ContentTooLong {
            len,
            max: MAX_CONTENT_CHARS,
        });
    }

    let sender = match sender_raw.trim() {
        "" => ANONYMOUS_SENDER,
        trimmed => trimmed,
    };

    Ok((sender.to_string(), content.to_string()))
}

/// Guestbook engine.
///
/// Holds the session's working list and is the only writer of the
/// guestbook slot.
pub struct Guestbook<S> {
    store: EntryStore<S>,
    entries: Vec<GuestbookEntry>,
    /// Entries in storage as of the last read or successful write
    stored: usize,
}

impl<S: KeyValueStore> Guestbook<S> {
    /// Open the guestbook in the standard slot of `store`.
    pub fn new(store: S) -> Self {
        Self::with_entry_store(EntryStore::new(store))
    }

    pub fn with_entry_store(store: EntryStore<S>) -> Self {
        let entries = store.load_entries();
        tracing::debug!(count = entries.len(), "Guestbook opened");
        Self {
            store,
            stored: entries.len(),
            entries,
        }
    }

    /// Entries of the current session, oldest first.
    pub fn entries(&self) -> &[GuestbookEntry] {
        &self.entries
    }

    /// Storage this guestbook persists to.
    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    /// Re-read the working list from storage.
    pub fn reload(&mut self) -> &[GuestbookEntry] {
        self.entries = self.store.load_entries();
        self.stored = self.entries.len();
        &self.entries
    }

    /// Submit a message stamped with the current local time.
    pub fn submit(
        &mut self,
        sender_raw: &str,
        content_raw: &str,
    ) -> Result<GuestbookEntry, ValidationError> {
        self.submit_at(sender_raw, content_raw, &Local::now())
    }

    /// Submit a message stamped with `now`.
    ///
    /// On validation failure nothing is read or written. On success the entry
    /// is appended to the stored list and returned; if the write fails the
    /// entry still shows for this session.
    pub fn submit_at<Tz: TimeZone>(
        &mut self,
        sender_raw: &str,
        content_raw: &str,
        now: &DateTime<Tz>,
    ) -> Result<GuestbookEntry, ValidationError>
    where
        Tz::Offset: std::fmt::Display,
    {
        let (sender, content) = validate(sender_raw, content_raw)?;

        let mut all = self.store.load_entries();
        let last_id = all
            .iter()
            .chain(self.entries.iter())
            .map(|e| e.id)
            .max()
            .unwrap_or(i64::MIN);
        let id = now.timestamp_millis().max(last_id.saturating_add(1));

        let entry = GuestbookEntry {
            id,
            sender,
            content,
            time: format_time(now),
        };

        all.push(entry.clone());
        match self.store.try_save_entries(&all) {
            Ok(()) => self.stored = all.len(),
            Err(e) => {
                // The entry stays in the session list; storage still holds the list read above
                tracing::warn!(count = all.len(), "Failed to save guestbook entries: {}", e);
                self.stored = all.len() - 1;
            }
        }
        self.entries = all;

        tracing::info!(id = entry.id, "Guestbook entry submitted");
        Ok(entry)
    }

    /// Number of messages shown on the page: stored entries plus presets.
    ///
    /// Reflects storage as of the last open, [`reload`](Self::reload) or
    /// submit; writes from other tabs show up after the next reload.
    pub fn total_count(&self) -> usize {
        self.stored + PRESET_ENTRIES.len()
    }

    /// Render the built-in messages to markup.
    pub fn render_presets(&self) -> Vec<String> {
        PRESET_ENTRIES.iter().map(render_preset).collect()
    }

    /// Render the working list to markup, oldest first.
    pub fn render_all(&self) -> Vec<String> {
        self.entries.iter().map(render).collect()
    }
}

/// Count banner text ("已收录 N 条留言") for `total`.
pub fn count_banner(total: usize) -> String {
    format!("已收录 {} 条留言", total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::{FixedOffset, Utc};

    fn at(h: u32, m: u32) -> DateTime<FixedOffset> {
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        tz.with_ymd_and_hms(2024, 5, 1, h, m, 0).unwrap()
    }

    #[test]
    fn test_validate_trims_and_defaults_sender() {
        let (sender, content) = validate("   ", "  hello  ").unwrap();
        assert_eq!(sender, ANONYMOUS_SENDER);
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_validate_rejects_blank_content() {
        assert_eq!(validate("a", " \n\t "), Err(ValidationError::EmptyContent));
        assert_eq!(validate("a", ""), Err(ValidationError::EmptyContent));
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        let exactly = "字".repeat(MAX_CONTENT_CHARS);
        assert!(validate("", &exactly).is_ok());

        let over = "字".repeat(MAX_CONTENT_CHARS + 1);
        assert_eq!(
            validate("", &over),
            Err(ValidationError::ContentTooLong {
                len: 501,
                max: MAX_CONTENT_CHARS
            })
        );
    }

    #[test]
    fn test_validate_trims_before_length_check() {
        let padded = format!("   {}   ", "a".repeat(MAX_CONTENT_CHARS));
        assert!(validate("", &padded).is_ok());
    }

    #[test]
    fn test_submit_persists_and_formats() {
        let backend = MemoryStore::new();
        let mut book = Guestbook::new(&backend);

        let entry = book.submit_at(" 高城 ", "测试留言", &at(12, 30)).unwrap();
        assert_eq!(entry.sender, "高城");
        assert_eq!(entry.content, "测试留言");
        assert_eq!(entry.time, "2024.05.01 12:30");
        assert_eq!(entry.id, at(12, 30).timestamp_millis());

        let reopened = Guestbook::new(&backend);
        assert_eq!(reopened.entries(), &[entry]);
    }

    #[test]
    fn test_submit_ids_are_unique_within_same_millisecond() {
        let mut book = Guestbook::new(MemoryStore::new());
        let a = book.submit_at("", "one", &at(8, 0)).unwrap();
        let b = book.submit_at("", "two", &at(8, 0)).unwrap();
        assert_eq!(b.id, a.id + 1);
    }

    #[test]
    fn test_rejected_submit_leaves_storage_untouched() {
        let backend = MemoryStore::new();
        let mut book = Guestbook::new(&backend);

        assert!(book.submit_at("x", "   ", &at(1, 0)).is_err());
        assert!(book
            .submit_at("x", &"a".repeat(MAX_CONTENT_CHARS + 1), &at(1, 0))
            .is_err());
        assert!(backend.is_empty());
        assert!(book.entries().is_empty());
    }

    #[test]
    fn test_total_count_includes_presets() {
        let mut book = Guestbook::new(MemoryStore::new());
        assert_eq!(book.total_count(), 3);

        book.submit_at("", "first", &at(9, 0)).unwrap();
        book.submit_at("", "second", &at(9, 1)).unwrap();
        assert_eq!(book.total_count(), 5);
    }

    #[test]
    fn test_submit_appends_to_latest_stored_list() {
        let backend = MemoryStore::new();
        let mut first_tab = Guestbook::new(&backend);
        let mut second_tab = Guestbook::new(&backend);

        first_tab.submit_at("", "from first", &at(10, 0)).unwrap();
        second_tab.submit_at("", "from second", &at(10, 1)).unwrap();

        assert_eq!(Guestbook::new(&backend).entries().len(), 2);
        assert_eq!(second_tab.entries().len(), 2);
    }

    #[test]
    fn test_failed_write_still_shows_entry_for_session() {
        let backend = MemoryStore::with_quota(40);
        let mut book = Guestbook::new(&backend);

        let entry = book.submit_at("", "this will not fit in the quota", &at(11, 0)).unwrap();
        assert_eq!(book.entries(), &[entry]);
        assert_eq!(book.total_count(), 3);
        assert_eq!(book.reload().len(), 0);
    }

    #[test]
    fn test_reload_picks_up_external_writes() {
        let backend = MemoryStore::new();
        let mut book = Guestbook::new(&backend);
        Guestbook::new(&backend).submit_at("", "elsewhere", &at(7, 0)).unwrap();

        assert!(book.entries().is_empty());
        assert_eq!(book.reload().len(), 1);
    }

    #[test]
    fn test_presets_render_safely() {
        let book = Guestbook::new(MemoryStore::new());
        let presets = book.render_presets();
        assert_eq!(presets.len(), 3);
        for (html, preset) in presets.iter().zip(PRESET_ENTRIES) {
            assert!(html.contains(preset.content));
            assert!(html.contains("message-item preset"));
            assert!(!html.contains(MESSAGE_TAG));
        }
    }

    #[test]
    fn test_total_count_is_cached_until_reload() {
        let backend = MemoryStore::new();
        let mut book = Guestbook::new(&backend);
        book.submit_at("", "mine", &at(9, 0)).unwrap();
        assert_eq!(book.total_count(), 4);

        Guestbook::new(&backend).submit_at("", "other tab", &at(9, 1)).unwrap();
        assert_eq!(book.total_count(), 4);

        book.reload();
        assert_eq!(book.total_count(), 5);
    }

    #[test]
    fn test_total_count_ignores_corrupt_slot_without_rereading() {
        let backend = MemoryStore::new();
        let mut book = Guestbook::new(&backend);
        book.submit_at("", "one", &at(9, 0)).unwrap();

        backend.set(crate::storage::MESSAGES_STORAGE_KEY, "not json").unwrap();
        assert_eq!(book.total_count(), 4);
        book.reload();
        assert_eq!(book.total_count(), 3);
    }

    #[test]
    fn test_render_all_matches_entries() {
        let mut book = Guestbook::new(MemoryStore::new());
        book.submit_at("a", "<b>bold</b>", &at(6, 0)).unwrap();
        let rendered = book.render_all();
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_count_banner() {
        assert_eq!(count_banner(4), "已收录 4 条留言");
    }

    #[test]
    fn test_submit_with_local_clock() {
        let mut book = Guestbook::new(MemoryStore::new());
        let before = Utc::now().timestamp_millis();
        let entry = book.submit("", "now").unwrap();
        assert!(entry.id >= before);
        assert_eq!(entry.time.len(), "YYYY.MM.DD HH:MM".len());
    }
}
