//! Consecutive qualifying-day streak tracking.
//!
//! A day qualifies when at least 80% of its tasks are completed. The streak
//! state records one transition per distinct date: re-evaluating a date that
//! was already counted never re-increments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Completion ratio required for a day to count toward the streak.
pub const QUALIFYING_PERCENT: u32 = 80;

/// Running streak counters plus the last date that qualified.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakState {
    /// Consecutive qualifying days ending at `last_date`.
    pub current: u32,
    /// Best streak ever reached.
    pub best: u32,
    /// Most recent date counted.
    pub last_date: Option<NaiveDate>,
}

impl StreakState {
    pub fn new() -> Self {
        StreakState::default()
    }

    /// Whether `completed` out of `total` clears the qualifying threshold.
    /// An empty day never qualifies.
    pub fn qualifies(completed: usize, total: usize) -> bool {
        // Exact integer form of completed / total >= 80%.
        total > 0 && 100 * completed >= QUALIFYING_PERCENT as usize * total
    }

    /// Feed a day's completion counts into the streak.
    ///
    /// Returns true when a transition happened: the day qualified and was
    /// not already counted. The streak extends only when `last_date` is
    /// exactly the previous calendar day; otherwise it restarts at 1.
    pub fn record_day(&mut self, date: NaiveDate, completed: usize, total: usize) -> bool {
        if !Self::qualifies(completed, total) {
            return false;
        }
        if self.last_date == Some(date) {
            return false;
        }

        let extends = self.last_date.is_some() && self.last_date == date.pred_opt();
        self.current = if extends { self.current + 1 } else { 1 };
        self.best = self.best.max(self.current);
        self.last_date = Some(date);
        debug!(%date, current = self.current, best = self.best, "streak updated");
        true
    }
}
