//! File-backed key-value store (one file per slot).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{read_error, write_error, KeyValueStore};
use crate::error::ArchiveResult;

/// Stores each slot as `<dir>/<key>.slot`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// failed write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> ArchiveResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.slot", safe))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ArchiveResult<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(read_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> ArchiveResult<()> {
        let path = self.slot_path(key);
        let tmp = path.with_extension("slot.tmp");

        fs::write(&tmp, value).map_err(|e| write_error(key, e))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(write_error(key, e));
        }
        tracing::debug!(key, bytes = value.len(), "Wrote slot {:?}", path);
        Ok(())
    }

    fn remove(&self, key: &str) -> ArchiveResult<()> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(write_error(key, e)),
        }
    }
}
