//! Key-value persistence for the archive.
//!
//! The site keeps its state in two browser slots:
//! - `gaocheng_gaoqi_messages` (local storage): the guestbook, as a JSON array
//! - `hasSeenLoader` (session storage): whether the splash already ran
//!
//! [`KeyValueStore`] abstracts over where those slots live so the same engine
//! runs in the browser, from the CLI (one file per slot), and in tests
//! (in memory). [`EntryStore`] sits on top and owns the serialized guestbook.

use crate::error::{ArchiveError, ArchiveResult};
use crate::guestbook::GuestbookEntry;

// Submodules
mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Slot holding the serialized guestbook entries
pub const MESSAGES_STORAGE_KEY: &str = "gaocheng_gaoqi_messages";

/// String-keyed, string-valued storage (the shape of `window.localStorage`).
pub trait KeyValueStore {
    /// Read a slot. `Ok(None)` when the slot has never been written.
    fn get(&self, key: &str) -> ArchiveResult<Option<String>>;

    /// Overwrite a slot.
    fn set(&self, key: &str, value: &str) -> ArchiveResult<()>;

    /// Delete a slot. Deleting a missing slot is not an error.
    fn remove(&self, key: &str) -> ArchiveResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> ArchiveResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ArchiveResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ArchiveResult<()> {
        (**self).remove(key)
    }
}

/// Guestbook persistence over a single key-value slot.
///
/// Reads never fail: a missing slot, an unreadable backend or corrupt JSON
/// all come back as an empty list (logged). Writes replace the whole list.
#[derive(Debug, Clone)]
pub struct EntryStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Use the standard guestbook slot.
    pub fn new(store: S) -> Self {
        Self::with_key(store, MESSAGES_STORAGE_KEY)
    }

    /// Use a custom slot name.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The slot this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying key-value store.
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Load every stored entry, oldest first.
    pub fn load_entries(&self) -> Vec<GuestbookEntry> {
        match self.try_load_entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(key = %self.key, "Failed to read guestbook entries: {}", e);
                Vec::new()
            }
        }
    }

    /// Load every stored entry, surfacing read and parse failures.
    pub fn try_load_entries(&self) -> ArchiveResult<Vec<GuestbookEntry>> {
        match self.store.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the stored list. Failures are logged and otherwise ignored;
    /// whatever was stored before stays in place.
    pub fn save_entries(&self, entries: &[GuestbookEntry]) {
        if let Err(e) = self.try_save_entries(entries) {
            tracing::warn!(key = %self.key, count = entries.len(), "Failed to save guestbook entries: {}", e);
        }
    }

    /// Replace the stored list, surfacing write failures.
    pub fn try_save_entries(&self, entries: &[GuestbookEntry]) -> ArchiveResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(&self.key, &raw)
    }
}

/// Map a backend failure into a write error with context.
pub(crate) fn write_error(key: &str, detail: impl std::fmt::Display) -> ArchiveError {
    ArchiveError::StorageWrite(format!("{}: {}", key, detail))
}

/// Map a backend failure into a read error with context.
pub(crate) fn read_error(key: &str, detail: impl std::fmt::Display) -> ArchiveError {
    ArchiveError::StorageRead(format!("{}: {}", key, detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, sender: &str, content: &str) -> GuestbookEntry {
        GuestbookEntry {
            id,
            sender: sender.to_string(),
            content: content.to_string(),
            time: "2024.05.01 12:30".to_string(),
        }
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let store = EntryStore::new(MemoryStore::new());
        assert!(store.load_entries().is_empty());
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        let backend = MemoryStore::new();
        backend.set(MESSAGES_STORAGE_KEY, "{not json").unwrap();
        let store = EntryStore::new(&backend);

        assert!(store.load_entries().is_empty());
        assert!(matches!(
            store.try_load_entries(),
            Err(ArchiveError::Serialization(_))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let store = EntryStore::new(MemoryStore::new());
        let entries = vec![entry(1, "高雀", "你好"), entry(2, "visitor", "hi")];

        store.save_entries(&entries);
        assert_eq!(store.load_entries(), entries);
    }

    #[test]
    fn test_save_overwrites_previous_list() {
        let store = EntryStore::new(MemoryStore::new());
        store.save_entries(&[entry(1, "a", "first")]);
        store.save_entries(&[entry(2, "b", "second")]);

        let loaded = store.load_entries();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 2);
    }

    #[test]
    fn test_failed_write_keeps_prior_state() {
        let backend = MemoryStore::with_quota(200);
        let store = EntryStore::new(&backend);
        store.save_entries(&[entry(1, "a", "short")]);

        let huge = "x".repeat(500);
        let result = store.try_save_entries(&[entry(1, "a", "short"), entry(2, "b", &huge)]);
        assert!(matches!(result, Err(ArchiveError::StorageWrite(_))));

        // The silent variant must not panic or clobber either
        store.save_entries(&[entry(3, "c", &huge)]);

        let loaded = store.load_entries();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].content, "short");
    }

    #[test]
    fn test_wire_shape() {
        let store = EntryStore::new(MemoryStore::new());
        store.save_entries(&[entry(1714537800000, "高城", "测试")]);

        let raw = store.backend().get(MESSAGES_STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let obj = &value.as_array().unwrap()[0];
        assert_eq!(obj["id"], serde_json::json!(1714537800000i64));
        assert_eq!(obj["sender"], "高城");
        assert_eq!(obj["content"], "测试");
        assert_eq!(obj["time"], "2024.05.01 12:30");
        assert_eq!(obj.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let backend = MemoryStore::new();
        let a = EntryStore::with_key(&backend, "a");
        let b = EntryStore::with_key(&backend, "b");
        a.save_entries(&[entry(1, "x", "y")]);

        assert_eq!(a.load_entries().len(), 1);
        assert!(b.load_entries().is_empty());
        assert_eq!(b.key(), "b");
    }
}
