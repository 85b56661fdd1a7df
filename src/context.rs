//! Archive context provider.
//!
//! Every piece of page state lives in one of the core state machines, each
//! held in a `Signal` so components re-render when it changes. Components
//! reach them through [`use_archive`] and mutate them only through the
//! command methods on [`Archive`], which also run the browser side effects
//! (timers, scroll, body classes).
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let archive = use_archive_provider();
//!
//! // In child components
//! let archive = use_archive();
//! archive.switch_tab(View::Gallery);
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use dossier_core::guestbook::SUBMIT_SUCCESS_NOTICE;
use dossier_core::{
    Character, Command, CostumeViewer, Effect, GalleryState, Guestbook, ScrollReveal,
    TimelineState, ValidationError, View, ViewSwitcher,
};
use gloo::timers::future::TimeoutFuture;

use crate::storage::BrowserStore;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_millis(2500);

/// A transient notice at the bottom of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    id: u64,
}

/// Handles to all page state.
///
/// `Copy`, so event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct Archive {
    pub views: Signal<ViewSwitcher>,
    pub gallery: Signal<GalleryState>,
    pub guestbook: Signal<Guestbook<BrowserStore>>,
    pub costume: Signal<CostumeViewer>,
    pub timeline: Signal<TimelineState>,
    pub reveal: Signal<ScrollReveal>,
    pub toast: Signal<Option<Toast>>,
    /// The device reports touch input; timeline cards open on tap
    pub touch: Signal<bool>,
}

/// Create the archive state and provide it to all child components.
pub fn use_archive_provider() -> Archive {
    let views = use_signal(ViewSwitcher::new);
    let gallery = use_signal(GalleryState::new);
    let guestbook = use_signal(|| Guestbook::new(BrowserStore::local()));
    let costume = use_signal(CostumeViewer::new);
    let timeline = use_signal(TimelineState::default);
    let reveal = use_signal(ScrollReveal::new);
    let toast = use_signal(|| None);
    let touch = use_signal(|| false);

    use_context_provider(|| Archive {
        views,
        gallery,
        guestbook,
        costume,
        timeline,
        reveal,
        toast,
        touch,
    })
}

/// Hook to access the archive state from context.
pub fn use_archive() -> Archive {
    use_context::<Archive>()
}

pub(crate) fn sleep(duration: Duration) -> TimeoutFuture {
    TimeoutFuture::new(duration.as_millis() as u32)
}

impl Archive {
    // ========================================================================
    // Views
    // ========================================================================

    /// Leave the current view and open `target` once the exit animation ends.
    pub fn switch_tab(mut self, target: View) {
        let pending = self.views.write().begin_switch(target);
        spawn(async move {
            sleep(pending.delay).await;
            let effects = self.views.write().finish_switch(pending);
            for effect in effects {
                self.run_effect(effect);
            }
        });
    }

    /// Show the landing menu right away.
    pub fn back_to_home(mut self) {
        let effects = self.views.write().back_to_home();
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(mut self, effect: Effect) {
        match effect {
            Effect::BuildGallery => {
                if self.gallery.write().ensure_built() {
                    tracing::info!(images = self.gallery.peek().len(), "Gallery built");
                }
            }
            Effect::ReloadGuestbook => {
                let count = self.guestbook.write().reload().len();
                tracing::debug!(count, "Guestbook reloaded");
            }
            Effect::ScrollToTop => {
                document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
            }
        }
    }

    // ========================================================================
    // Modals
    // ========================================================================

    /// Open the image modal on a gallery position.
    pub fn open_image(mut self, index: usize) {
        if self.gallery.write().open_at(index).is_some() {
            self.sync_scroll_lock();
        }
    }

    /// Open the image modal on any image (costume strips use this).
    pub fn open_src(mut self, src: &str) {
        self.gallery.write().open_src(src);
        self.sync_scroll_lock();
    }

    pub fn close_image(mut self) {
        self.gallery.write().close();
        self.sync_scroll_lock();
    }

    pub fn open_costume(mut self, character: Character, outfit: &str) {
        if self.costume.write().open(character, outfit).is_some() {
            self.sync_scroll_lock();
        }
    }

    pub fn close_costume(mut self) {
        self.costume.write().close();
        self.sync_scroll_lock();
    }

    /// Page scroll is locked while any modal is open.
    fn sync_scroll_lock(self) {
        let locked = self.gallery.peek().modal().is_open() || self.costume.peek().is_open();
        let overflow = if locked { "hidden" } else { "" };
        document::eval(&format!("document.body.style.overflow = '{}';", overflow));
    }

    // ========================================================================
    // Guestbook
    // ========================================================================

    /// Submit the compose form. Returns `true` when the form should be cleared.
    pub fn submit_message(mut self, sender: &str, content: &str) -> bool {
        let result = self.guestbook.write().submit(sender, content);
        match result {
            Ok(_) => {
                self.show_toast(SUBMIT_SUCCESS_NOTICE);
                document::eval(
                    "requestAnimationFrame(() => document.querySelector('#messages-list .message-item:last-child')?.scrollIntoView({ behavior: 'smooth', block: 'center' }));",
                );
                true
            }
            Err(e) => {
                tracing::debug!("Guestbook submission rejected: {}", e);
                gloo::dialogs::alert(e.notice());
                if e == ValidationError::EmptyContent {
                    document::eval("document.getElementById('message-content')?.focus();");
                }
                false
            }
        }
    }

    /// Show a toast for [`TOAST_DURATION`]. A newer toast replaces an older one.
    pub fn show_toast(mut self, message: &str) {
        let id = self.toast.peek().as_ref().map_or(0, |t| t.id + 1);
        self.toast.set(Some(Toast {
            message: message.to_string(),
            id,
        }));
        spawn(async move {
            sleep(TOAST_DURATION).await;
            if self.toast.peek().as_ref().is_some_and(|t| t.id == id) {
                self.toast.set(None);
            }
        });
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    /// Apply a keyboard command.
    pub fn run_command(mut self, command: Command) {
        match command {
            Command::CloseModal => {
                if self.gallery.peek().modal().is_open() {
                    self.close_image();
                } else if self.costume.peek().is_open() {
                    self.close_costume();
                }
            }
            Command::PrevImage => {
                self.gallery.write().prev();
            }
            Command::NextImage => {
                self.gallery.write().next();
            }
            Command::BackToHome => self.back_to_home(),
            Command::SwitchTab(view) => self.switch_tab(view),
            Command::ToggleRevealAll => {
                self.timeline.write().toggle_reveal_all();
            }
        }
    }
}
