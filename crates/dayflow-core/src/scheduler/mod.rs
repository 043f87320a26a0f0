//! Automatic scheduler for a day's tasks.
//!
//! This module packs floating tasks into the free gaps of a day:
//! - Fixed tasks (timed, non-generic category) are immovable obstacles
//! - Floating tasks are placed by priority, then energy demand
//! - Each placement leaves a buffer on both sides of existing blocks
//! - Tasks that fit nowhere are emitted unscheduled, never dropped

pub mod conflict;

use tracing::debug;

use crate::task::{ClockTime, Task};

pub use conflict::{detect_conflicts, Conflict};

/// Scheduler day window and spacing.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Earliest time floating tasks may start.
    pub day_start: ClockTime,
    /// Latest time a floating task may end.
    pub day_end: ClockTime,
    /// Free minutes kept on each side of an occupied block.
    pub buffer_min: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            // 09:00 - 22:00 window, 15 min spacing. Fixed by design; the
            // consumer does not vary these per call.
            day_start: ClockTime(9 * 60),
            day_end: ClockTime(22 * 60),
            buffer_min: 15,
        }
    }
}

/// Greedy interval packer for floating tasks.
pub struct AutoScheduler {
    config: SchedulerConfig,
}

impl AutoScheduler {
    /// Create a new scheduler with the default day window.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Place every floating task of a day into the earliest gap that fits.
    ///
    /// Returns a new task list containing the fixed tasks unchanged plus the
    /// floating tasks, each with a start time when a gap was found. Output
    /// order is not significant; the consumer re-sorts for display.
    pub fn schedule_day(&self, tasks: &[Task]) -> Vec<Task> {
        let (fixed, mut floating): (Vec<&Task>, Vec<&Task>) =
            tasks.iter().partition(|t| t.is_fixed());

        // Priority first, energy breaks ties; sort_by is stable so equal
        // tasks keep their stored order.
        floating.sort_by(|a, b| {
            b.priority
                .weight()
                .cmp(&a.priority.weight())
                .then(b.energy.weight().cmp(&a.energy.weight()))
        });

        let mut blocked: Vec<(i64, i64)> = fixed.iter().filter_map(|t| t.interval()).collect();
        blocked.sort_by_key(|b| b.0);

        let day_start = self.config.day_start.minutes() as i64;
        let day_end = self.config.day_end.minutes() as i64;
        let buffer = self.config.buffer_min as i64;

        let mut out: Vec<Task> = fixed.into_iter().cloned().collect();

        for task in floating {
            let need = task.estimate_min as i64;
            let slot = self.find_slot(&blocked, day_start, day_end, buffer, need);

            match slot.and_then(|(i, start)| {
                ClockTime::from_minutes(start as u32).map(|t| (i, start, t))
            }) {
                Some((i, start, start_time)) => {
                    let mut scheduled = task.clone();
                    scheduled.start_time = Some(start_time);
                    blocked.insert(i, (start, start + need));
                    debug!(id = %scheduled.id, %start_time, "placed floating task");
                    out.push(scheduled);
                }
                None => {
                    // No gap fits: keep the task as-is rather than drop it.
                    debug!(id = %task.id, "no gap fits, task left unscheduled");
                    out.push(task.clone());
                }
            }
        }

        out
    }

    /// Earliest gap index and start minute able to hold `need` minutes.
    ///
    /// Gap candidates, scanned in order: before the first block (from the
    /// day-start boundary), between each consecutive pair of blocks with the
    /// buffer applied on both sides, and after the last block until the
    /// day-end boundary.
    fn find_slot(
        &self,
        blocked: &[(i64, i64)],
        day_start: i64,
        day_end: i64,
        buffer: i64,
        need: i64,
    ) -> Option<(usize, i64)> {
        for i in 0..=blocked.len() {
            let slot_start = if i == 0 { day_start } else { blocked[i - 1].1 + buffer };
            let slot_end = if i == blocked.len() { day_end } else { blocked[i].0 - buffer };

            if slot_end - slot_start >= need {
                return Some((i, slot_start));
            }
        }
        None
    }
}

impl Default for AutoScheduler {
    fn default() -> Self {
        Self::new()
    }
}
