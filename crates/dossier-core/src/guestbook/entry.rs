//! Guestbook entry types

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Display format of [`GuestbookEntry::time`]
pub const TIME_FORMAT: &str = "%Y.%m.%d %H:%M";

/// A visitor message as stored in the guestbook slot.
///
/// The serialized shape is fixed: `{"id", "sender", "content", "time"}`.
///
/// # Example
///
/// ```ignore
/// let entry = GuestbookEntry {
///     id: 1714537800000,
///     sender: "高城".to_string(),
///     content: "测试留言".to_string(),
///     time: "2024.05.01 12:30".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookEntry {
    /// Creation timestamp in milliseconds, unique within the slot
    pub id: i64,
    /// Trimmed sender name, or the placeholder when none was given
    pub sender: String,
    /// Trimmed message body (1-500 characters)
    pub content: String,
    /// Submission moment as `YYYY.MM.DD HH:MM`
    pub time: String,
}

/// A fixed message baked into the page above the visitor messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetEntry {
    pub sender: &'static str,
    pub content: &'static str,
    pub time: &'static str,
}

impl PresetEntry {
    /// View this preset as a regular entry (id 0, never stored).
    pub fn to_entry(&self) -> GuestbookEntry {
        GuestbookEntry {
            id: 0,
            sender: self.sender.to_string(),
            content: self.content.to_string(),
            time: self.time.to_string(),
        }
    }
}

/// Format a moment the way entries display it.
pub fn format_time<Tz: TimeZone>(moment: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    moment.format(TIME_FORMAT).to_string()
}
