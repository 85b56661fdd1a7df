//! End-to-end scenarios across the core components
//!
//! Each test drives the same sequence of commands the web front end issues
//! for a visitor session.

use dossier_core::gallery::Category;
use dossier_core::guestbook::RenderedEntry;
use dossier_core::keyboard::{command_for, Command, KeyContext};
use dossier_core::storage::MESSAGES_STORAGE_KEY;
use dossier_core::{
    splash, Effect, EntryStore, FileStore, Filter, GalleryState, Guestbook, KeyValueStore,
    MemoryStore, View, ViewSwitcher,
};
use tempfile::TempDir;

#[test]
fn primary_character_submission() {
    let backend = MemoryStore::new();
    let mut book = Guestbook::new(&backend);
    let before = EntryStore::new(&backend).load_entries().len();

    let entry = book.submit("高城", "测试留言").unwrap();
    let rendered = RenderedEntry::from_entry(&entry);

    assert_eq!(rendered.avatar, '高');
    assert!(rendered.is_primary_character);
    assert!(rendered.to_html().contains("message-avatar gc"));
    assert_eq!(EntryStore::new(&backend).load_entries().len(), before + 1);
}

#[test]
fn open_at_outside_index_is_noop() {
    let mut gallery = GalleryState::new();
    gallery.ensure_built();
    gallery.open_at(10);

    // The front end's "-1" is usize::MAX after conversion
    assert!(gallery.open_at(usize::MAX).is_none());
    assert!(gallery.open_at(gallery.len()).is_none());
    assert_eq!(gallery.position(), Some(10));
}

#[test]
fn costume_filter_selects_expected_entries() {
    let mut gallery = GalleryState::new();
    gallery.ensure_built();

    let selected = gallery.select(Filter::Only(Category::Costume));
    let generated_past_15: Vec<usize> = (16..=50).map(|n| 6 + n - 1).collect();
    let appended: Vec<usize> = (56..61).collect();

    let expected: Vec<usize> = generated_past_15.into_iter().chain(appended).collect();
    assert_eq!(selected, expected);
    assert_eq!(gallery.select(Filter::All), (0..61).collect::<Vec<_>>());
}

#[test]
fn visitor_session_flow() {
    let local = MemoryStore::new();
    let session = MemoryStore::new();

    // First load runs the splash and marks it seen
    assert!(splash::should_run(&session));
    let mut sequence = dossier_core::SplashSequence::new();
    while !sequence.tick(7.5) {}
    splash::mark_seen(&session);
    assert!(!splash::should_run(&session));

    let mut views = ViewSwitcher::new();
    let mut gallery = GalleryState::new();
    let mut book = Guestbook::new(&local);

    // Press "3": gallery builds once
    let Some(Command::SwitchTab(target)) = command_for("3", KeyContext::default()) else {
        panic!("3 should switch tabs");
    };
    let pending = views.begin_switch(target);
    for effect in views.finish_switch(pending) {
        if effect == Effect::BuildGallery {
            assert!(gallery.ensure_built());
        }
    }
    assert_eq!(views.active(), Some(View::Gallery));

    // Visit again: no rebuild
    views.back_to_home();
    let pending = views.begin_switch(View::Gallery);
    for effect in views.finish_switch(pending) {
        if effect == Effect::BuildGallery {
            assert!(!gallery.ensure_built());
        }
    }

    // Browse with the arrow keys
    gallery.open_at(0);
    let ctx = KeyContext::from_tag("BODY", views.active());
    assert_eq!(command_for("ArrowLeft", ctx), Some(Command::PrevImage));
    gallery.prev();
    assert_eq!(gallery.current().unwrap().src, "costume_gc_casual.jpg");
    gallery.close();

    // Another tab writes a message; opening messages reloads it
    Guestbook::new(&local).submit("访客", "你好").unwrap();
    let pending = views.begin_switch(View::Messages);
    for effect in views.finish_switch(pending) {
        if effect == Effect::ReloadGuestbook {
            book.reload();
        }
    }
    assert_eq!(book.entries().len(), 1);
    assert_eq!(book.total_count(), 4);
}

#[test]
fn guestbook_persists_through_file_store() {
    let temp = TempDir::new().unwrap();
    {
        let store = FileStore::open(temp.path()).unwrap();
        let mut book = Guestbook::new(store);
        book.submit("", "第一条").unwrap();
        book.submit("gc", "second").unwrap();
    }

    let store = FileStore::open(temp.path()).unwrap();
    let raw = store.get(MESSAGES_STORAGE_KEY).unwrap().unwrap();
    assert!(raw.starts_with('['));

    let book = Guestbook::new(store);
    assert_eq!(book.entries().len(), 2);
    assert_eq!(book.entries()[0].sender, "匿名访客");
    assert!(book.entries()[1].id > book.entries()[0].id);
}

#[test]
fn corrupt_storage_recovers_as_empty() {
    let backend = MemoryStore::new();
    backend.set(MESSAGES_STORAGE_KEY, "[{\"id\": \"oops\"}]").unwrap();

    let mut book = Guestbook::new(&backend);
    assert!(book.entries().is_empty());
    assert_eq!(book.total_count(), 3);

    // The next submission overwrites the corrupt slot
    book.submit("", "fresh start").unwrap();
    assert_eq!(EntryStore::new(&backend).load_entries().len(), 1);
}
