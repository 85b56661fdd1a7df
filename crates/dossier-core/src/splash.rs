//! Loading splash ("archive retrieval") sequence
//!
//! A progress bar climbs in random steps while a year counter walks through
//! the key years of the story and a status line reports fake retrieval
//! stages. The splash runs once per browser session.

use std::time::Duration;

use rand::Rng;

use crate::storage::KeyValueStore;

/// Session slot set once the splash has completed
pub const LOADER_SEEN_KEY: &str = "hasSeenLoader";

/// Interval between progress ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Pause on the completed frame before fading out
pub const COMPLETE_HOLD: Duration = Duration::from_millis(600);

/// Loader fade-out duration
pub const FADE_OUT: Duration = Duration::from_millis(800);

/// Years shown on the counter, in order
pub const KEY_YEARS: [u16; 12] = [
    1980, 1983, 1998, 2001, 2003, 2006, 2007, 2008, 2010, 2011, 2012, 2013,
];

/// The year the counter flags (and settles on when done)
pub const CRITICAL_YEAR: u16 = 2007;

pub const STATUS_MESSAGES: [&str; 8] = [
    "正在建立连接...",
    "加载档案数据...",
    "解析时间线...",
    "验证身份信息...",
    "同步记忆碎片...",
    "重建事件序列...",
    "检测到关键事件...",
    "档案调取完成",
];

pub const CRITICAL_STATUS: &str = "检测到关键事件: 血舌";
pub const COMPLETE_STATUS: &str = "档案调取完成";

/// Progress points per status message
const PROGRESS_PER_MESSAGE: f64 = 14.0;

/// Styling of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Normal,
    Error,
    Success,
}

impl StatusTone {
    pub fn class(&self) -> &'static str {
        match self {
            StatusTone::Normal => "",
            StatusTone::Error => "error",
            StatusTone::Success => "success",
        }
    }
}

/// Splash progress state.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashSequence {
    progress: f64,
    next_year: usize,
    message_index: usize,
    year: Option<u16>,
    year_highlighted: bool,
    status: &'static str,
    tone: StatusTone,
    complete: bool,
}

impl Default for SplashSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashSequence {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            next_year: 0,
            message_index: 0,
            year: None,
            year_highlighted: false,
            status: STATUS_MESSAGES[0],
            tone: StatusTone::Normal,
            complete: false,
        }
    }

    /// Progress in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress as shown in the percentage label.
    pub fn percent(&self) -> u8 {
        self.progress.floor() as u8
    }

    pub fn year(&self) -> Option<u16> {
        self.year
    }

    pub fn year_highlighted(&self) -> bool {
        self.year_highlighted
    }

    pub fn status(&self) -> &'static str {
        self.status
    }

    pub fn tone(&self) -> StatusTone {
        self.tone
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Advance progress by `step` points.
    ///
    /// Returns `true` on the tick that completes the sequence (exactly once).
    pub fn tick(&mut self, step: f64) -> bool {
        if self.complete {
            return false;
        }

        self.progress = (self.progress + step.max(0.0)).min(100.0);

        let message_index = (self.progress / PROGRESS_PER_MESSAGE).floor() as usize;
        if message_index != self.message_index && message_index < STATUS_MESSAGES.len() {
            self.message_index = message_index;
            if self.tone != StatusTone::Error {
                self.status = STATUS_MESSAGES[message_index];
            }
        }

        let target_year = (self.progress / 100.0 * KEY_YEARS.len() as f64).floor() as usize;
        if self.next_year < target_year {
            self.advance_year();
        }

        if self.progress >= 100.0 {
            self.finish();
            return true;
        }
        false
    }

    /// Advance by a random step in `[2, 8)`.
    pub fn tick_random<R: Rng>(&mut self, rng: &mut R) -> bool {
        let step = rng.random_range(2.0..8.0);
        self.tick(step)
    }

    fn advance_year(&mut self) {
        let Some(&year) = KEY_YEARS.get(self.next_year) else {
            return;
        };
        self.year = Some(year);
        if year == CRITICAL_YEAR {
            self.year_highlighted = true;
            self.status = CRITICAL_STATUS;
            self.tone = StatusTone::Error;
        } else {
            self.year_highlighted = false;
            if self.tone == StatusTone::Error {
                self.tone = StatusTone::Normal;
            }
        }
        self.next_year += 1;
    }

    fn finish(&mut self) {
        self.year = Some(CRITICAL_YEAR);
        self.year_highlighted = true;
        self.status = COMPLETE_STATUS;
        self.tone = StatusTone::Success;
        self.complete = true;
        tracing::debug!("Splash sequence complete");
    }
}

/// Whether the splash should run this session.
///
/// An unreadable session store counts as "not seen".
pub fn should_run<S: KeyValueStore + ?Sized>(session: &S) -> bool {
    match session.get(LOADER_SEEN_KEY) {
        Ok(flag) => flag.is_none(),
        Err(e) => {
            tracing::warn!("Failed to read splash flag: {}", e);
            true
        }
    }
}

/// Record that the splash ran. Failures are logged only.
pub fn mark_seen<S: KeyValueStore + ?Sized>(session: &S) {
    if let Err(e) = session.set(LOADER_SEEN_KEY, "true") {
        tracing::warn!("Failed to store splash flag: {}", e);
    }
}
