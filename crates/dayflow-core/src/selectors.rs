//! Pure queries over a day's task list: what to do next, and which small
//! tasks make easy wins. The caller supplies the current wall-clock time;
//! nothing here reads the clock itself.

use crate::task::{ClockTime, Task};

/// A task that started up to this many minutes ago still counts as current.
pub const NEXT_ACTION_GRACE_MIN: i64 = 30;

/// Maximum estimate for a task to count as a quick win.
pub const QUICK_WIN_MAX_MINUTES: u32 = 15;

/// How many quick wins the consumer shows.
pub const QUICK_WIN_DISPLAY_LIMIT: usize = 3;

/// The nearest upcoming (or just-started) incomplete timed task.
///
/// Tasks starting earlier than `now` minus the grace window are skipped;
/// among the rest the earliest start wins, first-listed on ties.
pub fn next_action<'a>(tasks: &'a [Task], now: ClockTime) -> Option<&'a Task> {
    let cutoff = now.minutes() as i64 - NEXT_ACTION_GRACE_MIN;

    let mut best: Option<(&Task, i64)> = None;
    for task in tasks.iter().filter(|t| !t.completed) {
        let Some(start) = task.start_time else {
            continue;
        };
        let start = start.minutes() as i64;
        if start < cutoff {
            continue;
        }
        if best.map_or(true, |(_, s)| start < s) {
            best = Some((task, start));
        }
    }
    best.map(|(task, _)| task)
}

/// Incomplete tasks short enough to knock out quickly, in stored order.
/// The consumer displays at most [`QUICK_WIN_DISPLAY_LIMIT`] of them.
pub fn quick_wins(tasks: &[Task]) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| !t.completed && t.estimate_min <= QUICK_WIN_MAX_MINUTES)
        .collect()
}
