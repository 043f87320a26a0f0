//! Trend analytics over the most recent stored days.
//!
//! The window covers the 7 most recently *inserted* dates, in whatever order
//! the user visited them. This mirrors the persisted key order of the
//! original store rather than a calendar lookback; when days are visited
//! non-monotonically the window is not a true calendar week. Preserved on
//! purpose and pinned by test.

use serde::{Deserialize, Serialize};

use crate::store::TaskStore;
use crate::task::Category;

/// Number of days the analytics window covers.
pub const ANALYTICS_WINDOW_DAYS: usize = 7;

/// Planned minutes broken down by task category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryMinutes {
    pub task: u64,
    pub work: u64,
    pub personal: u64,
    pub life: u64,
}

impl CategoryMinutes {
    fn add(&mut self, category: Category, minutes: u64) {
        match category {
            Category::Task => self.task += minutes,
            Category::Work => self.work += minutes,
            Category::Personal => self.personal += minutes,
            Category::Life => self.life += minutes,
        }
    }

    pub fn total(&self) -> u64 {
        self.task + self.work + self.personal + self.life
    }
}

/// Aggregated view of the recent window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyReport {
    /// Completed / total tasks as a rounded percentage.
    pub completion_rate: u32,
    /// Planned minutes divided by the window size (always 7), rounded.
    pub avg_minutes_per_day: u32,
    pub minutes_by_category: CategoryMinutes,
    pub total_tasks: usize,
    pub completed_tasks: usize,
}

/// Summarize completion and planned time over the analytics window.
pub fn weekly_report(store: &TaskStore) -> WeeklyReport {
    let mut total_tasks = 0usize;
    let mut completed_tasks = 0usize;
    let mut total_minutes = 0u64;
    let mut minutes_by_category = CategoryMinutes::default();

    for day in store.recent_days(ANALYTICS_WINDOW_DAYS) {
        for task in &day.tasks {
            total_tasks += 1;
            total_minutes += task.estimate_min as u64;
            minutes_by_category.add(task.category, task.estimate_min as u64);
            if task.completed {
                completed_tasks += 1;
            }
        }
    }

    let completion_rate = if total_tasks > 0 {
        (completed_tasks as f64 / total_tasks as f64 * 100.0).round() as u32
    } else {
        0
    };
    // Divide by the fixed window size even when fewer dates have data.
    let avg_minutes_per_day = (total_minutes as f64 / ANALYTICS_WINDOW_DAYS as f64).round() as u32;

    WeeklyReport {
        completion_rate,
        avg_minutes_per_day,
        minutes_by_category,
        total_tasks,
        completed_tasks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn add(store: &mut TaskStore, date_str: &str, text: &str, minutes: u32, done: bool) {
        let d = date(date_str);
        let id = store
            .add_task(d, TaskDraft::new(text, minutes))
            .expect("non-empty text")
            .id
            .clone();
        if done {
            store.toggle_task(d, &id);
        }
    }

    #[test]
    fn empty_store_reports_zeroes() {
        let report = weekly_report(&TaskStore::new());
        assert_eq!(report.completion_rate, 0);
        assert_eq!(report.avg_minutes_per_day, 0);
        assert_eq!(report.total_tasks, 0);
        assert_eq!(report.minutes_by_category.total(), 0);
    }

    #[test]
    fn half_completed_week_is_fifty_percent() {
        let mut store = TaskStore::new();
        for i in 1..=7 {
            let day = format!("2024-03-0{i}");
            add(&mut store, &day, "a", 30, i % 2 == 0);
            if i <= 3 {
                add(&mut store, &day, "b", 30, i % 2 != 0);
            }
        }
        let report = weekly_report(&store);
        assert_eq!(report.total_tasks, 10);
        assert_eq!(report.completed_tasks, 5);
        assert_eq!(report.completion_rate, 50);
    }

    #[test]
    fn average_divides_by_window_size_regardless_of_data() {
        let mut store = TaskStore::new();
        add(&mut store, "2024-03-01", "a", 70, false);
        // One day with 70 minutes, still divided by 7.
        assert_eq!(weekly_report(&store).avg_minutes_per_day, 10);
    }

    #[test]
    fn category_breakdown_sums_estimates() {
        let mut store = TaskStore::new();
        let d = date("2024-03-01");
        store.add_task(
            d,
            TaskDraft {
                category: crate::task::Category::Work,
                ..TaskDraft::new("deep work", 90)
            },
        );
        store.add_task(d, TaskDraft::new("chore", 15));

        let report = weekly_report(&store);
        assert_eq!(report.minutes_by_category.work, 90);
        assert_eq!(report.minutes_by_category.task, 15);
        assert_eq!(report.minutes_by_category.total(), 105);
    }

    #[test]
    fn window_follows_insertion_order_not_calendar_order() {
        let mut store = TaskStore::new();
        // Eight days inserted; 2024-12-31 is calendar-latest but inserted
        // first, so it falls out of the window.
        add(&mut store, "2024-12-31", "dropped", 60, false);
        for i in 1..=7 {
            add(&mut store, &format!("2024-03-0{i}"), "kept", 10, false);
        }

        let report = weekly_report(&store);
        assert_eq!(report.total_tasks, 7);
        assert_eq!(report.minutes_by_category.total(), 70);
    }

    #[test]
    fn completion_rate_rounds_to_nearest() {
        let mut store = TaskStore::new();
        add(&mut store, "2024-03-01", "a", 10, true);
        add(&mut store, "2024-03-01", "b", 10, false);
        add(&mut store, "2024-03-01", "c", 10, false);
        // 1/3 -> 33.33 -> 33
        assert_eq!(weekly_report(&store).completion_rate, 33);
    }
}
