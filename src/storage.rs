//! Browser storage backend.
//!
//! Implements the core `KeyValueStore` over `localStorage` (the guestbook)
//! and `sessionStorage` (the splash flag) through gloo.

use dossier_core::{ArchiveError, ArchiveResult, KeyValueStore};
use gloo::storage::{LocalStorage, SessionStorage, Storage};

/// Which browser storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    Local,
    Session,
}

/// `KeyValueStore` over one browser storage area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserStore {
    area: Area,
}

impl BrowserStore {
    /// Persistent per-origin storage.
    pub fn local() -> Self {
        Self { area: Area::Local }
    }

    /// Storage cleared when the tab closes.
    pub fn session() -> Self {
        Self {
            area: Area::Session,
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> ArchiveResult<Option<String>> {
        let item = match self.area {
            Area::Local => LocalStorage::raw().get_item(key),
            Area::Session => SessionStorage::raw().get_item(key),
        };
        item.map_err(|e| ArchiveError::StorageRead(format!("{}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> ArchiveResult<()> {
        let result = match self.area {
            Area::Local => LocalStorage::raw().set_item(key, value),
            Area::Session => SessionStorage::raw().set_item(key, value),
        };
        result.map_err(|e| ArchiveError::StorageWrite(format!("{}: {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> ArchiveResult<()> {
        let result = match self.area {
            Area::Local => LocalStorage::raw().remove_item(key),
            Area::Session => SessionStorage::raw().remove_item(key),
        };
        result.map_err(|e| ArchiveError::StorageWrite(format!("{}: {:?}", key, e)))
    }
}
