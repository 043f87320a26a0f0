//! Task model for day planning.
//!
//! A [`Task`] is one planned activity on a calendar day: a label, a time
//! estimate, priority/energy metadata and an optional wall-clock start time.
//! Times within a day are plain local wall-clock values, represented by
//! [`ClockTime`] (minutes since midnight, serialized as `"HH:MM"`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Task priority for scheduling order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric weight used for sort order (high first).
    pub fn weight(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Category of task for organizing the day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Generic task, always eligible for auto-placement.
    Task,
    Work,
    Personal,
    /// Life maintenance (meals, sleep, routines).
    Life,
}

impl Default for Category {
    fn default() -> Self {
        Category::Task
    }
}

/// Energy level a task demands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    /// Low energy (e.g., end of day)
    Low,
    /// Medium energy (default)
    Medium,
    /// High energy (e.g., morning)
    High,
}

impl EnergyLevel {
    /// Numeric weight used for sort order (high first).
    pub fn weight(&self) -> u8 {
        match self {
            EnergyLevel::Low => 1,
            EnergyLevel::Medium => 2,
            EnergyLevel::High => 3,
        }
    }
}

impl Default for EnergyLevel {
    fn default() -> Self {
        EnergyLevel::Medium
    }
}

/// Error returned when parsing an `"HH:MM"` string fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid clock time '{0}', expected HH:MM")]
pub struct ParseClockTimeError(pub String);

/// A wall-clock time within a day, stored as minutes since midnight.
///
/// Serializes to/from the `"HH:MM"` form the persisted state uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(pub(crate) u16);

impl ClockTime {
    /// Create from hour and minute. Returns `None` for values outside a
    /// 24-hour clock.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(ClockTime((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Create from minutes since midnight. Returns `None` when out of range.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes < 24 * 60 {
            Some(ClockTime(minutes as u16))
        } else {
            None
        }
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.0 as u32
    }

    pub fn hour(&self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes() % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseClockTimeError(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(err)?;
        let hour: u32 = hour.parse().map_err(|_| err())?;
        let minute: u32 = minute.parse().map_err(|_| err())?;
        ClockTime::new(hour, minute).ok_or_else(err)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseClockTimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

/// One planned activity within a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier within the store.
    pub id: String,
    /// Task label.
    pub text: String,
    /// Whether the task is completed.
    pub completed: bool,
    /// Time estimate in minutes (always positive).
    pub estimate_min: u32,
    /// Priority for scheduling order.
    pub priority: Priority,
    /// Task category.
    pub category: Category,
    /// Energy level the task demands.
    pub energy: EnergyLevel,
    /// Optional wall-clock start time.
    pub start_time: Option<ClockTime>,
    /// Optional free-form recurrence tag (e.g. "daily").
    pub recurring: Option<String>,
    /// Creation time as a display string. Not used by any logic.
    pub created_at: String,
}

impl Task {
    /// Create a new task with default values and a fresh identifier.
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            id: new_task_id(),
            text: text.into(),
            completed: false,
            estimate_min: 30,
            priority: Priority::default(),
            category: Category::default(),
            energy: EnergyLevel::default(),
            start_time: None,
            recurring: None,
            created_at: created_at_now(),
        }
    }

    /// A fixed task has a pre-assigned start time and a non-generic category.
    /// Fixed tasks are immovable obstacles for the auto-scheduler.
    pub fn is_fixed(&self) -> bool {
        self.start_time.is_some() && self.category != Category::Task
    }

    /// Occupied interval `[start, start + estimate)` in minutes since
    /// midnight, or `None` when the task has no start time. The end may
    /// extend past midnight for late tasks.
    pub fn interval(&self) -> Option<(i64, i64)> {
        self.start_time.map(|s| {
            let start = s.minutes() as i64;
            (start, start + self.estimate_min as i64)
        })
    }

    /// Copy for another day: fresh identifier, completion cleared.
    pub fn duplicate(&self) -> Self {
        Task {
            id: new_task_id(),
            completed: false,
            created_at: created_at_now(),
            ..self.clone()
        }
    }
}

/// User-entered fields for a new task. The store turns a draft into a
/// [`Task`] with a fresh identifier.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub text: String,
    pub estimate_min: u32,
    pub priority: Priority,
    pub category: Category,
    pub energy: EnergyLevel,
    pub start_time: Option<ClockTime>,
    pub recurring: Option<String>,
}

impl TaskDraft {
    pub fn new(text: impl Into<String>, estimate_min: u32) -> Self {
        TaskDraft {
            text: text.into(),
            estimate_min,
            ..TaskDraft::default()
        }
    }

    pub(crate) fn into_task(self) -> Task {
        Task {
            id: new_task_id(),
            text: self.text,
            completed: false,
            estimate_min: self.estimate_min,
            priority: self.priority,
            category: self.category,
            energy: self.energy,
            start_time: self.start_time,
            recurring: self.recurring,
            created_at: created_at_now(),
        }
    }
}

/// Comparator for display order: incomplete before complete, then by start
/// time when both are timed, then priority descending.
pub fn display_order(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| match (a.start_time, b.start_time) {
            (Some(sa), Some(sb)) => sa.cmp(&sb),
            _ => Ordering::Equal,
        })
        .then_with(|| b.priority.weight().cmp(&a.priority.weight()))
}

/// The default life-maintenance template a fresh day starts with.
pub fn default_template() -> Vec<Task> {
    let entry = |text: &str, estimate: u32, priority, start: ClockTime, energy| Task {
        estimate_min: estimate,
        priority,
        category: Category::Life,
        energy,
        start_time: Some(start),
        recurring: Some("daily".to_string()),
        ..Task::new(text)
    };

    vec![
        entry("Sleep", 480, Priority::High, clock(23, 0), EnergyLevel::Low),
        entry("Morning routine", 60, Priority::Medium, clock(7, 0), EnergyLevel::Medium),
        entry("Breakfast", 30, Priority::Medium, clock(8, 0), EnergyLevel::Low),
        entry("Lunch", 45, Priority::Medium, clock(12, 30), EnergyLevel::Low),
        entry("Dinner", 60, Priority::Medium, clock(18, 30), EnergyLevel::Low),
        entry("Evening wind down", 60, Priority::Low, clock(22, 0), EnergyLevel::Low),
    ]
}

// Template times are compile-time constants within clock range.
const fn clock(hour: u16, minute: u16) -> ClockTime {
    ClockTime(hour * 60 + minute)
}

fn new_task_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn created_at_now() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_time_parse_and_format() {
        let t: ClockTime = "09:05".parse().unwrap();
        assert_eq!(t.minutes(), 9 * 60 + 5);
        assert_eq!(t.to_string(), "09:05");

        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
    }

    #[test]
    fn clock_time_serde_round_trip() {
        let t = ClockTime::new(18, 30).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"18:30\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn fixed_task_requires_time_and_non_generic_category() {
        let mut task = Task::new("call");
        assert!(!task.is_fixed());

        task.start_time = ClockTime::new(10, 0);
        assert!(!task.is_fixed(), "generic category stays floating");

        task.category = Category::Work;
        assert!(task.is_fixed());
    }

    #[test]
    fn duplicate_gets_fresh_id_and_clears_completion() {
        let mut task = Task::new("review notes");
        task.completed = true;
        let copy = task.duplicate();
        assert_ne!(copy.id, task.id);
        assert!(!copy.completed);
        assert_eq!(copy.text, task.text);
        assert_eq!(copy.estimate_min, task.estimate_min);
    }

    #[test]
    fn default_template_shape() {
        let template = default_template();
        assert_eq!(template.len(), 6);
        assert!(template.iter().all(|t| t.category == Category::Life));
        assert!(template.iter().all(|t| !t.completed));
        assert!(template.iter().all(|t| t.start_time.is_some()));
        assert!(template.iter().all(|t| t.estimate_min > 0));
    }

    #[test]
    fn display_order_incomplete_then_time_then_priority() {
        let mut done = Task::new("done");
        done.completed = true;
        done.start_time = ClockTime::new(8, 0);

        let mut early = Task::new("early");
        early.start_time = ClockTime::new(9, 0);

        let mut late = Task::new("late");
        late.start_time = ClockTime::new(11, 0);

        let mut urgent = Task::new("urgent");
        urgent.priority = Priority::High;

        let mut tasks = vec![done.clone(), late.clone(), urgent.clone(), early.clone()];
        tasks.sort_by(display_order);

        assert_eq!(tasks.last().unwrap().text, "done");
        let early_pos = tasks.iter().position(|t| t.text == "early").unwrap();
        let late_pos = tasks.iter().position(|t| t.text == "late").unwrap();
        assert!(early_pos < late_pos);
    }
}
