use dioxus::prelude::*;
use dossier_core::splash;

use crate::components::{CostumeModal, ImageModal, NavHeader, SplashScreen, ToastNotice};
use crate::context::use_archive_provider;
use crate::listeners::use_page_listeners;
use crate::pages::{GalleryView, LandingMenu, MessagesView, ProfilesView, StoryView};
use crate::storage::BrowserStore;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the archive context, runs the splash on the
/// first visit of a session, and lays out every view. Only one view is
/// marked active at a time; the others stay mounted and hidden by CSS.
#[component]
pub fn App() -> Element {
    let archive = use_archive_provider();
    use_page_listeners(archive);

    let show_splash = use_hook(|| splash::should_run(&BrowserStore::session()));
    let mut content_visible = use_signal(move || !show_splash);

    // Mirror the active view onto <body> for view-specific styling
    use_effect(move || {
        let class = archive.views.read().current().body_class();
        document::eval(&format!("document.body.className = '{}';", class));
    });

    let content_class = if content_visible() {
        "main-content visible"
    } else {
        "main-content"
    };

    rsx! {
        document::Title { "高城 · 高雀 | 档案馆" }
        style { {GLOBAL_STYLES} }

        if show_splash {
            SplashScreen { on_finished: move |_| content_visible.set(true) }
        }

        div { class: "{content_class}",
            NavHeader {}
            LandingMenu {}
            StoryView {}
            ProfilesView {}
            GalleryView {}
            MessagesView {}
        }

        ImageModal {}
        CostumeModal {}
        ToastNotice {}
    }
}
