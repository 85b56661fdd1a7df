//! Loading splash.
//!
//! Runs once per browser session. Progress ticks forward in random steps while
//! the year counter walks through the key years; 2007 is flagged in red.

use dioxus::prelude::*;
use dossier_core::splash::{self, SplashSequence, COMPLETE_HOLD, FADE_OUT, TICK_INTERVAL};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::context::sleep;
use crate::storage::BrowserStore;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Loading,
    FadingOut,
    Hidden,
}

/// Full-screen loader shown before the archive content.
#[component]
pub fn SplashScreen(
    /// Called once the loader has faded out
    on_finished: EventHandler<()>,
) -> Element {
    let mut sequence = use_signal(SplashSequence::new);
    let mut phase = use_signal(|| Phase::Loading);

    use_future(move || async move {
        // Splash steps only need to look random
        let seed = chrono::Utc::now().timestamp_millis() as u64;
        let mut rng = SmallRng::seed_from_u64(seed);

        loop {
            sleep(TICK_INTERVAL).await;
            if sequence.write().tick_random(&mut rng) {
                break;
            }
        }

        splash::mark_seen(&BrowserStore::session());
        sleep(COMPLETE_HOLD).await;
        phase.set(Phase::FadingOut);
        sleep(FADE_OUT).await;
        phase.set(Phase::Hidden);
        on_finished.call(());
    });

    if phase() == Phase::Hidden {
        return rsx! {};
    }

    let state = sequence.read();
    let year = state.year().map(|y| y.to_string()).unwrap_or_else(|| "----".to_string());
    let year_class = if state.year_highlighted() {
        "year-counter highlight"
    } else {
        "year-counter"
    };
    let status_class = format!("status-text {}", state.tone().class());
    let loader_class = if phase() == Phase::FadingOut {
        "loader fading"
    } else {
        "loader"
    };
    let width = format!("width: {:.1}%;", state.progress());

    rsx! {
        div { id: "loader", class: "{loader_class}",
            div { class: "loader-inner",
                p { class: "loader-label", "CLASSIFIED ARCHIVE · 机密档案" }
                div { class: "{year_class}", "{year}" }
                div { class: "progress-track",
                    div { class: "progress-bar", style: "{width}" }
                }
                div { class: "loader-meta",
                    span { class: "{status_class}", "{state.status()}" }
                    span { class: "loading-percent", "{state.percent()}%" }
                }
            }
        }
    }
}
