//! Focus timer state machine.
//!
//! The engine holds no thread and reads no clock: the caller (normally the
//! [`Ticker`](super::Ticker)) invokes `tick()` once per second. Reaching
//! zero flips between a fixed focus phase and a fixed break phase and stops,
//! waiting for an explicit restart.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running
//!           |
//!           v (tick reaches zero: mode flips)
//!         Idle
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Focus phase length in seconds.
pub const FOCUS_SECS: u32 = 25 * 60;
/// Break phase length in seconds.
pub const BREAK_SECS: u32 = 5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Focus,
    Break,
}

impl TimerMode {
    /// Full phase duration in seconds.
    pub fn duration_secs(&self) -> u32 {
        match self {
            TimerMode::Focus => FOCUS_SECS,
            TimerMode::Break => BREAK_SECS,
        }
    }

    /// The mode the timer flips to on completion.
    pub fn next(&self) -> TimerMode {
        match self {
            TimerMode::Focus => TimerMode::Break,
            TimerMode::Break => TimerMode::Focus,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Countdown over the focus/break cycle, optionally linked to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    mode: TimerMode,
    state: TimerState,
    remaining_secs: u32,
    /// Task the current session works on, if any.
    task_id: Option<String>,
}

impl FocusTimer {
    pub fn new() -> Self {
        Self {
            mode: TimerMode::Focus,
            state: TimerState::Idle,
            remaining_secs: FOCUS_SECS,
            task_id: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start or resume the countdown, optionally linking a task.
    /// Starting an already-running timer only relinks the task.
    pub fn start(&mut self, task_id: Option<String>) -> Option<Event> {
        self.task_id = task_id;
        match self.state {
            TimerState::Running => None,
            TimerState::Idle | TimerState::Paused => {
                self.state = TimerState::Running;
                Some(Event::TimerStarted {
                    mode: self.mode,
                    duration_secs: self.remaining_secs,
                    task_id: self.task_id.clone(),
                    at: Utc::now(),
                })
            }
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                Some(Event::TimerPaused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Idle | TimerState::Paused => None,
        }
    }

    /// Stop and restore the current mode's full duration.
    pub fn reset(&mut self) -> Event {
        self.state = TimerState::Idle;
        self.remaining_secs = self.mode.duration_secs();
        Event::TimerReset {
            mode: self.mode,
            at: Utc::now(),
        }
    }

    /// Complete the current phase immediately.
    pub fn skip(&mut self) -> Event {
        let from = self.mode;
        self.complete_phase();
        Event::TimerSkipped {
            from,
            to: self.mode,
            at: Utc::now(),
        }
    }

    /// Advance the countdown by one second. Returns an event when the phase
    /// completes; `None` while the timer is idle, paused, or mid-phase.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        if self.remaining_secs > 1 {
            self.remaining_secs -= 1;
            return None;
        }
        let finished = self.mode;
        self.complete_phase();
        Some(Event::TimerCompleted {
            finished,
            next: self.mode,
            at: Utc::now(),
        })
    }

    /// Flip to the other mode with its full duration and stop. The user
    /// restarts the next phase explicitly.
    fn complete_phase(&mut self) {
        self.mode = self.mode.next();
        self.remaining_secs = self.mode.duration_secs();
        self.state = TimerState::Idle;
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}
