//! Top-level view switching
//!
//! Switching tabs is a two-step transition so the outgoing view can animate
//! out:
//!
//! ```text
//! begin_switch(mode)  -> landing hidden, every view inactive, PendingSwitch
//!        ... SWITCH_DELAY ...
//! finish_switch(p)    -> target active, Effects for the adapter to run
//! ```
//!
//! A pending switch that was overtaken by a newer `begin_switch` or by
//! `back_to_home` is dropped when it finishes.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ArchiveError;

/// Exit animation time between hiding the old view and showing the new one
pub const SWITCH_DELAY: Duration = Duration::from_millis(300);

/// Top-level views of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Landing,
    Story,
    Profiles,
    Gallery,
    Messages,
}

impl View {
    /// Views reachable from the menu, in menu order.
    pub const TABS: [View; 4] = [View::Story, View::Profiles, View::Gallery, View::Messages];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Story => "story",
            View::Profiles => "profiles",
            View::Gallery => "gallery",
            View::Messages => "messages",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            View::Landing => "首页",
            View::Story => "时间线",
            View::Profiles => "人物档案",
            View::Gallery => "影像画廊",
            View::Messages => "战地留言板",
        }
    }

    /// Body class while this view is active (`mode-story`, ...).
    pub fn body_class(&self) -> &'static str {
        match self {
            View::Landing => "",
            View::Story => "mode-story",
            View::Profiles => "mode-profiles",
            View::Gallery => "mode-gallery",
            View::Messages => "mode-messages",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landing" => Ok(View::Landing),
            "story" => Ok(View::Story),
            "profiles" => Ok(View::Profiles),
            "gallery" => Ok(View::Gallery),
            "messages" => Ok(View::Messages),
            other => Err(ArchiveError::UnknownView(other.to_string())),
        }
    }
}

/// Side effects the adapter runs after a transition lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Build the gallery index (the gallery guards against rebuilding)
    BuildGallery,
    /// Re-read the guestbook from storage
    ReloadGuestbook,
    /// Smooth-scroll the window to the top
    ScrollToTop,
}

/// A tab switch waiting for [`SWITCH_DELAY`] to elapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "pass to ViewSwitcher::finish_switch after SWITCH_DELAY"]
pub struct PendingSwitch {
    pub target: View,
    pub delay: Duration,
    generation: u64,
}

/// Which view is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSwitcher {
    landing_visible: bool,
    active: Option<View>,
    generation: u64,
}

impl Default for ViewSwitcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSwitcher {
    /// Start on the landing menu.
    pub fn new() -> Self {
        Self {
            landing_visible: true,
            active: None,
            generation: 0,
        }
    }

    pub fn landing_visible(&self) -> bool {
        self.landing_visible
    }

    /// The view flagged active, if any. `None` on the landing menu and during
    /// a transition.
    pub fn active(&self) -> Option<View> {
        self.active
    }

    /// Whether `view` is showing.
    pub fn is_active(&self, view: View) -> bool {
        match view {
            View::Landing => self.landing_visible,
            other => self.active == Some(other),
        }
    }

    /// The view that best describes the page right now.
    pub fn current(&self) -> View {
        self.active.unwrap_or(View::Landing)
    }

    /// Hide landing and every view, and schedule `mode` to become active.
    pub fn begin_switch(&mut self, mode: View) -> PendingSwitch {
        self.landing_visible = false;
        self.active = None;
        self.generation += 1;
        tracing::debug!(target_view = %mode, generation = self.generation, "Switching view");
        PendingSwitch {
            target: mode,
            delay: SWITCH_DELAY,
            generation: self.generation,
        }
    }

    /// Activate the target of `pending` and return the effects to run.
    ///
    /// Returns no effects if the switch was superseded in the meantime.
    pub fn finish_switch(&mut self, pending: PendingSwitch) -> Vec<Effect> {
        if pending.generation != self.generation {
            tracing::debug!(target_view = %pending.target, "Dropping superseded view switch");
            return Vec::new();
        }

        let mut effects = Vec::with_capacity(2);
        match pending.target {
            View::Landing => {
                self.landing_visible = true;
                self.active = None;
            }
            target => {
                self.active = Some(target);
                match target {
                    View::Gallery => effects.push(Effect::BuildGallery),
                    View::Messages => effects.push(Effect::ReloadGuestbook),
                    _ => {}
                }
            }
        }
        effects.push(Effect::ScrollToTop);
        effects
    }

    /// Show the landing menu immediately and cancel any pending switch.
    pub fn back_to_home(&mut self) -> Vec<Effect> {
        self.landing_visible = true;
        self.active = None;
        self.generation += 1;
        vec![Effect::ScrollToTop]
    }
}

/// Scroll distance past which the landing menu hands over to the timeline
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// Debounce before the scroll-triggered switch fires
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(100);

/// A debounced request to open the story view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTicket {
    generation: u64,
}

/// Scrolling down on the landing menu opens the timeline.
#[derive(Debug, Clone, Default)]
pub struct ScrollTrigger {
    last_y: f64,
    generation: u64,
}

impl ScrollTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a scroll position. Returns a ticket to redeem after
    /// [`SCROLL_DEBOUNCE`] when the landing menu should hand over.
    ///
    /// Only the latest ticket is honoured.
    pub fn observe(&mut self, views: &ViewSwitcher, scroll_y: f64) -> Option<ScrollTicket> {
        if !views.landing_visible() || views.is_active(View::Story) {
            return None;
        }

        let moving_down = scroll_y > self.last_y;
        self.last_y = scroll_y;

        if scroll_y > SCROLL_THRESHOLD && moving_down {
            self.generation += 1;
            Some(ScrollTicket {
                generation: self.generation,
            })
        } else {
            None
        }
    }

    /// Whether `ticket` is still the most recent one.
    pub fn redeem(&self, ticket: ScrollTicket) -> bool {
        ticket.generation == self.generation
    }
}
