//! Error types for Dossier

use thiserror::Error;

/// Main error type for Dossier operations
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Reading a storage slot failed (backend unavailable, denied, ...)
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Writing a storage slot failed (quota exceeded, denied, ...)
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Guestbook input was rejected
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Gallery filter name that is neither "all" nor a known category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Costume key that does not name a catalogued character
    #[error("Unknown character: {0}")]
    UnknownCharacter(String),

    /// View name that does not match any top-level view
    #[error("Unknown view: {0}")]
    UnknownView(String),
}

/// Rejected guestbook submission.
///
/// Nothing is created or persisted when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Content was empty after trimming
    #[error("Message content is empty")]
    EmptyContent,

    /// Content exceeded the character limit after trimming
    #[error("Message content is {len} characters, limit is {max}")]
    ContentTooLong { len: usize, max: usize },
}

impl ValidationError {
    /// Blocking notice shown to the visitor.
    pub fn notice(&self) -> &'static str {
        match self {
            ValidationError::EmptyContent => "请输入留言内容",
            ValidationError::ContentTooLong { .. } => "留言内容不能超过500字",
        }
    }
}

/// Result type alias using ArchiveError
pub type ArchiveResult<T> = Result<T, ArchiveError>;
