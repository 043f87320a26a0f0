//! # Dayflow Core Library
//!
//! Core logic for the Dayflow day planner: scheduling tasks against the
//! hours of a day, tracking completion streaks, running a focus timer, and
//! summarizing weekly trends. The presentation layer is a thin consumer of
//! this crate -- it supplies the current date, the current wall-clock time
//! and user-entered task fields, and re-renders from the plain data these
//! operations return. No rendering, no I/O besides the state files.
//!
//! ## Key Components
//!
//! - [`TaskStore`]: all task records, keyed by calendar date, with CRUD
//!   operations and lazy day initialization from a life template
//! - [`AutoScheduler`]: greedy interval packing of floating tasks into the
//!   free gaps around fixed ones
//! - [`detect_conflicts`]: overlap detection between a day's timed tasks
//! - [`StreakState`]: consecutive qualifying-day streak counters
//! - [`weekly_report`]: completion and planned-time trends over the most
//!   recent stored days
//! - [`FocusTimer`] / [`Ticker`]: focus/break countdown and its cancellable
//!   one-second drive
//! - [`StateStore`]: wholesale load/save of the persisted entries, failing
//!   open to defaults on malformed state

pub mod error;
pub mod events;
pub mod scheduler;
pub mod selectors;
pub mod stats;
pub mod storage;
pub mod store;
pub mod streak;
pub mod task;
pub mod timer;

pub use error::{CoreError, Result, StorageError};
pub use events::Event;
pub use scheduler::{detect_conflicts, AutoScheduler, Conflict, SchedulerConfig};
pub use selectors::{next_action, quick_wins};
pub use stats::{weekly_report, CategoryMinutes, WeeklyReport};
pub use storage::StateStore;
pub use store::{DayPlan, TaskStore};
pub use streak::StreakState;
pub use task::{Category, ClockTime, EnergyLevel, Priority, Task, TaskDraft};
pub use timer::{FocusTimer, Ticker, TimerMode, TimerState};
