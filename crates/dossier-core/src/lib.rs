//! Dossier Core Library
//!
//! State and rules behind the archive site for 高城 and 高雀: a browser-local
//! guestbook, an image gallery with a modal viewer, tabbed views, the loading
//! splash and the story timeline.
//!
//! ## Overview
//!
//! Nothing here touches a UI framework. Each page behavior is a plain struct
//! with commands that return results or effects; the web front end renders
//! from these structs and forwards browser events into them, and the CLI
//! drives the same types against a file-backed store.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dossier_core::{Guestbook, GalleryState, MemoryStore};
//!
//! let mut book = Guestbook::new(MemoryStore::new());
//! let entry = book.submit("高城", "测试留言")?;
//! println!("{}", dossier_core::guestbook::render(&entry));
//! println!("{} messages", book.total_count());
//!
//! let mut gallery = GalleryState::new();
//! gallery.ensure_built();
//! gallery.open_at(0);
//! gallery.next();
//! ```

pub mod costume;
pub mod error;
pub mod gallery;
pub mod guestbook;
pub mod keyboard;
pub mod splash;
pub mod storage;
pub mod timeline;
pub mod view;

// Re-exports
pub use costume::{Character, CostumeEntry, CostumeViewer};
pub use error::{ArchiveError, ArchiveResult, ValidationError};
pub use gallery::{Category, Filter, GalleryState, ImageDescriptor, Modal};
pub use guestbook::{Guestbook, GuestbookEntry, RenderedEntry};
pub use keyboard::{Command, KeyContext};
pub use splash::SplashSequence;
pub use storage::{EntryStore, FileStore, KeyValueStore, MemoryStore};
pub use timeline::{ScrollReveal, TimelineState};
pub use view::{Effect, PendingSwitch, ScrollTrigger, View, ViewSwitcher};
