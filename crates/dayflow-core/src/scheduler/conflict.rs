//! Overlap detection between a day's timed tasks.
//!
//! Intervals are half-open `[start, start + estimate)`, so tasks that touch
//! end-to-start do not conflict. The scan is quadratic in the day's task
//! count, which stays in the tens for a personal planner.

use serde::{Deserialize, Serialize};

use crate::task::{ClockTime, Task};

/// A pair of tasks whose occupied intervals overlap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conflict {
    /// Label of the earlier-listed task.
    pub first: String,
    /// Label of the other task.
    pub second: String,
    /// Start time of the earlier-listed task, for display.
    pub at: ClockTime,
}

/// Find all unordered pairs of timed tasks whose intervals overlap.
pub fn detect_conflicts(tasks: &[Task]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, a) in tasks.iter().enumerate() {
        let Some((start_a, end_a)) = a.interval() else {
            continue;
        };
        for b in &tasks[i + 1..] {
            let Some((start_b, end_b)) = b.interval() else {
                continue;
            };
            if start_a < end_b && end_a > start_b {
                // interval() only returns Some when start_time is set.
                if let Some(at) = a.start_time {
                    conflicts.push(Conflict {
                        first: a.text.clone(),
                        second: b.text.clone(),
                        at,
                    });
                }
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(text: &str, hour: u32, minute: u32, estimate: u32) -> Task {
        Task {
            start_time: ClockTime::new(hour, minute),
            estimate_min: estimate,
            ..Task::new(text)
        }
    }

    #[test]
    fn overlapping_pair_is_reported_once() {
        let tasks = vec![timed("a", 9, 0, 30), timed("b", 9, 15, 30)];
        let conflicts = detect_conflicts(&tasks);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].first, "a");
        assert_eq!(conflicts[0].second, "b");
        assert_eq!(conflicts[0].at, ClockTime::new(9, 0).unwrap());
    }

    #[test]
    fn touching_endpoints_do_not_conflict() {
        let tasks = vec![timed("a", 9, 0, 30), timed("b", 9, 30, 30)];
        assert!(detect_conflicts(&tasks).is_empty());
    }

    #[test]
    fn untimed_tasks_are_ignored() {
        let tasks = vec![timed("a", 9, 0, 120), Task::new("floating")];
        assert!(detect_conflicts(&tasks).is_empty());
    }

    #[test]
    fn containment_counts_as_overlap() {
        let tasks = vec![timed("outer", 9, 0, 120), timed("inner", 9, 30, 15)];
        assert_eq!(detect_conflicts(&tasks).len(), 1);
    }

    #[test]
    fn detection_is_irreflexive_and_pairwise() {
        // Three mutually overlapping tasks: exactly the three unordered
        // pairs, no self-pairs, no duplicates.
        let tasks = vec![
            timed("a", 9, 0, 60),
            timed("b", 9, 10, 60),
            timed("c", 9, 20, 60),
        ];
        let conflicts = detect_conflicts(&tasks);
        assert_eq!(conflicts.len(), 3);
        assert!(conflicts.iter().all(|c| c.first != c.second));
    }
}
