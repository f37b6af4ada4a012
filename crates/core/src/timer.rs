//! Countdown timer
//!
//! The countdown is computed from wall-clock time since the session started
//! (`now_ms - started_ms`), never from a decrementing counter, so dropped or
//! late ticks cannot stretch the budget. All times are milliseconds on a
//! monotonic clock chosen by the caller.

use crate::types::TIMER_DISPLAY_INTERVAL_MS;

/// What a poll observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerPoll {
    /// New remaining whole seconds, when it changed since the last poll.
    pub display: Option<u32>,
    /// The budget is used up.
    pub expired: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    budget_secs: u32,
    started_ms: u64,
    stopped_ms: Option<u64>,
    last_display: Option<u32>,
}

impl Countdown {
    pub fn start(budget_secs: u32, now_ms: u64) -> Self {
        Self {
            budget_secs,
            started_ms: now_ms,
            stopped_ms: None,
            last_display: None,
        }
    }

    pub fn budget_secs(&self) -> u32 {
        self.budget_secs
    }

    pub fn started_ms(&self) -> u64 {
        self.started_ms
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped_ms.is_some()
    }

    /// Milliseconds since start, frozen once stopped.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        self.stopped_ms
            .unwrap_or(now_ms)
            .saturating_sub(self.started_ms)
    }

    /// Whole seconds since start.
    pub fn elapsed_secs(&self, now_ms: u64) -> u32 {
        let secs = self.elapsed_ms(now_ms) / TIMER_DISPLAY_INTERVAL_MS as u64;
        u32::try_from(secs).unwrap_or(u32::MAX)
    }

    /// Whole seconds left, as shown to the player.
    pub fn remaining_secs(&self, now_ms: u64) -> u32 {
        self.budget_secs.saturating_sub(self.elapsed_secs(now_ms))
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.remaining_secs(now_ms) == 0
    }

    /// Observe the clock. A stopped timer reports nothing.
    pub fn poll(&mut self, now_ms: u64) -> TimerPoll {
        if self.is_stopped() {
            return TimerPoll::default();
        }

        let remaining = self.remaining_secs(now_ms);
        let display = if self.last_display != Some(remaining) {
            self.last_display = Some(remaining);
            Some(remaining)
        } else {
            None
        };

        TimerPoll {
            display,
            expired: remaining == 0,
        }
    }

    /// Freeze the clock. Returns true only the first time.
    pub fn stop(&mut self, now_ms: u64) -> bool {
        if self.is_stopped() {
            return false;
        }
        self.stopped_ms = Some(now_ms.max(self.started_ms));
        true
    }
}
