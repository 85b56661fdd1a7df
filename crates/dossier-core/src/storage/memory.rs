//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{write_error, KeyValueStore};
use crate::error::ArchiveResult;

/// Volatile store backed by a shared map.
///
/// Clones share the same slots. An optional byte quota makes writes fail the
/// way a full `localStorage` does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty store with no size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects writes once keys plus values would
    /// exceed `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            slots: Arc::default(),
            quota: Some(quota),
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// Whether no slot has been written.
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ArchiveResult<Option<String>> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ArchiveResult<()> {
        let mut slots = self.slots.write();

        if let Some(quota) = self.quota {
            let others: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(write_error(
                    key,
                    format!("quota exceeded ({} > {} bytes)", needed, quota),
                ));
            }
        }

        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ArchiveResult<()> {
        self.slots.write().remove(key);
        Ok(())
    }
}
