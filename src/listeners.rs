//! Window-level event listeners.
//!
//! Keyboard, scroll and touch events that are not tied to one element are
//! installed once through `document::eval` and streamed back into Rust, where
//! they are forwarded to the core state machines.

use dioxus::prelude::*;
use dossier_core::keyboard::{command_for, KeyContext};
use dossier_core::timeline::ElementRect;
use dossier_core::view::SCROLL_DEBOUNCE;
use dossier_core::{ScrollTrigger, View};

use crate::context::{sleep, Archive};

/// Sends `[key, targetTagName]` for every key press
const KEYDOWN_JS: &str = r#"
document.addEventListener('keydown', (e) => {
    const tag = e.target && e.target.tagName ? e.target.tagName : '';
    dioxus.send([e.key, tag]);
});
"#;

/// Sends `window.scrollY` on every scroll
const SCROLL_JS: &str = r#"
window.addEventListener('scroll', () => dioxus.send(window.scrollY), { passive: true });
"#;

/// Sends `[viewportHeight, [[id, top, height], ...]]` for laid-out elements
/// carrying `data-reveal` that have not played their entrance yet. Runs on
/// scroll, resize and whenever the body class (the active view) changes.
const REVEAL_JS: &str = r#"
const report = () => {
    const items = Array.from(document.querySelectorAll('[data-reveal]'))
        .filter((el) => el.offsetParent !== null && !el.classList.contains('visible'))
        .map((el) => {
            const r = el.getBoundingClientRect();
            return [el.dataset.reveal, r.top, r.height];
        });
    if (items.length > 0) {
        dioxus.send([window.innerHeight, items]);
    }
};
const schedule = () => requestAnimationFrame(report);
window.addEventListener('scroll', schedule, { passive: true });
window.addEventListener('resize', schedule);
new MutationObserver(schedule).observe(document.body, { attributes: true, attributeFilter: ['class'] });
setTimeout(schedule, 400);
"#;

const TOUCH_PROBE_JS: &str = r#"
dioxus.send('ontouchstart' in window || navigator.maxTouchPoints > 0);
"#;

/// Sends `true` for every click that lands outside a timeline node
const TAP_OUTSIDE_JS: &str = r#"
document.addEventListener('click', (e) => {
    if (!e.target.closest('.story-node')) {
        dioxus.send(true);
    }
});
"#;

/// Install every window-level listener for the lifetime of the app.
pub fn use_page_listeners(mut archive: Archive) {
    let mut trigger = use_signal(ScrollTrigger::new);

    // Keyboard shortcuts
    use_future(move || async move {
        let mut keys = document::eval(KEYDOWN_JS);
        while let Ok((key, tag)) = keys.recv::<(String, String)>().await {
            let ctx = KeyContext::from_tag(&tag, archive.views.peek().active());
            if let Some(command) = command_for(&key, ctx) {
                tracing::trace!(key = %key, ?command, "Keyboard command");
                archive.run_command(command);
            }
        }
    });

    // Scrolling down on the landing menu opens the timeline
    use_future(move || async move {
        let mut scroll = document::eval(SCROLL_JS);
        while let Ok(y) = scroll.recv::<f64>().await {
            let ticket = trigger.write().observe(&archive.views.peek(), y);
            let Some(ticket) = ticket else {
                continue;
            };
            spawn(async move {
                sleep(SCROLL_DEBOUNCE).await;
                if trigger.peek().redeem(ticket) && archive.views.peek().landing_visible() {
                    archive.switch_tab(View::Story);
                }
            });
        }
    });

    // Entrance animations
    use_future(move || async move {
        let mut reveal = document::eval(REVEAL_JS);
        while let Ok((viewport, items)) = reveal.recv::<(f64, Vec<(String, f64, f64)>)>().await {
            let mut next = archive.reveal.peek().clone();
            let mut changed = false;
            for (id, top, height) in items {
                changed |= next.observe(&id, ElementRect { top, height }, viewport);
            }
            if changed {
                archive.reveal.set(next);
            }
        }
    });

    // Touch devices open timeline cards on tap instead of hover
    use_future(move || async move {
        let mut probe = document::eval(TOUCH_PROBE_JS);
        if !matches!(probe.recv::<bool>().await, Ok(true)) {
            return;
        }
        tracing::debug!("Touch input detected");
        archive.touch.set(true);

        let mut outside = document::eval(TAP_OUTSIDE_JS);
        while outside.recv::<bool>().await.is_ok() {
            archive.timeline.write().tap_outside();
        }
    });
}
