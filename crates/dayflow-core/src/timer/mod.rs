//! Focus timer: a second-granularity state machine plus the tokio ticker
//! that drives it.

mod engine;
mod ticker;

pub use engine::{FocusTimer, TimerMode, TimerState, BREAK_SECS, FOCUS_SECS};
pub use ticker::Ticker;
