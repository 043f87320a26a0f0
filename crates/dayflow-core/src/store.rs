//! In-memory task store: calendar dates mapped to their task lists.
//!
//! Days are kept in insertion order. That order is observable: the weekly
//! analytics window covers the 7 most recently *inserted* dates, matching
//! the persisted key order of the original flat store.
//!
//! All mutations go through the CRUD operations here; every other component
//! works on read-only views of a day's tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::task::{default_template, Task, TaskDraft};

/// One calendar date and its ordered task list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
}

/// Owner of all task records, keyed by calendar date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskStore {
    days: Vec<DayPlan>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Tasks stored for a date. Empty slice when the day is unknown.
    /// Never creates the day.
    pub fn day(&self, date: NaiveDate) -> &[Task] {
        self.days
            .iter()
            .find(|d| d.date == date)
            .map(|d| d.tasks.as_slice())
            .unwrap_or(&[])
    }

    /// All known dates in insertion order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|d| d.date)
    }

    /// The `n` most recently inserted days, oldest-inserted first.
    pub fn recent_days(&self, n: usize) -> &[DayPlan] {
        let skip = self.days.len().saturating_sub(n);
        &self.days[skip..]
    }

    /// Populate an absent or empty day with the default life template.
    /// Idempotent: a day that already has tasks is left untouched.
    pub fn initialize_day(&mut self, date: NaiveDate) {
        let day = self.day_entry(date);
        if day.tasks.is_empty() {
            day.tasks = default_template();
            debug!(%date, tasks = day.tasks.len(), "initialized day from template");
        }
    }

    /// Add a task from user-entered fields. The label is trimmed; an empty
    /// label is silently rejected. Returns the stored task on success.
    pub fn add_task(&mut self, date: NaiveDate, mut draft: TaskDraft) -> Option<&Task> {
        draft.text = draft.text.trim().to_string();
        if draft.text.is_empty() {
            return None;
        }
        let day = self.day_entry(date);
        day.tasks.push(draft.into_task());
        let task = day.tasks.last()?;
        debug!(%date, id = %task.id, "added task");
        Some(task)
    }

    /// Flip the completion flag of a task. No-op (false) when the id is
    /// unknown for that date.
    pub fn toggle_task(&mut self, date: NaiveDate, id: &str) -> bool {
        match self.task_mut(date, id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove a task. No-op (false) when the id is unknown for that date.
    pub fn delete_task(&mut self, date: NaiveDate, id: &str) -> bool {
        let Some(day) = self.days.iter_mut().find(|d| d.date == date) else {
            return false;
        };
        let before = day.tasks.len();
        day.tasks.retain(|t| t.id != id);
        day.tasks.len() != before
    }

    /// Replace a day's task list wholesale (used by the auto-scheduler's
    /// consumer to commit its output).
    pub fn replace_day(&mut self, date: NaiveDate, tasks: Vec<Task>) {
        self.day_entry(date).tasks = tasks;
    }

    /// Copy every task of `from` into `to`, each copy with a fresh id and
    /// completion cleared. Returns the number of copied tasks; a source day
    /// without tasks is a silent no-op.
    pub fn copy_day(&mut self, from: NaiveDate, to: NaiveDate) -> usize {
        let copies: Vec<Task> = self.day(from).iter().map(Task::duplicate).collect();
        if copies.is_empty() {
            return 0;
        }
        let copied = copies.len();
        self.day_entry(to).tasks.extend(copies);
        debug!(%from, %to, copied, "copied day");
        copied
    }

    /// `(completed, total)` counts for a date.
    pub fn completion(&self, date: NaiveDate) -> (usize, usize) {
        let tasks = self.day(date);
        let completed = tasks.iter().filter(|t| t.completed).count();
        (completed, tasks.len())
    }

    /// Total planned minutes for a date.
    pub fn planned_minutes(&self, date: NaiveDate) -> u64 {
        self.day(date).iter().map(|t| t.estimate_min as u64).sum()
    }

    fn day_entry(&mut self, date: NaiveDate) -> &mut DayPlan {
        if let Some(idx) = self.days.iter().position(|d| d.date == date) {
            return &mut self.days[idx];
        }
        self.days.push(DayPlan {
            date,
            tasks: Vec::new(),
        });
        let last = self.days.len() - 1;
        &mut self.days[last]
    }

    fn task_mut(&mut self, date: NaiveDate, id: &str) -> Option<&mut Task> {
        self.days
            .iter_mut()
            .find(|d| d.date == date)?
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
    }
}
