//! One-second tick driver for the focus timer.
//!
//! The ticker is a cancellable repeating tokio task, not a thread of its
//! own logic: every second it locks the shared [`FocusTimer`], calls
//! `tick()`, and forwards any resulting event. Starting a new ticker always
//! aborts the previous one first, so a restart can never double-tick.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::events::Event;
use crate::timer::FocusTimer;

/// Handle to the repeating tick task.
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Begin ticking the shared timer once per second, sending completion
    /// events to `events`. Any previously started tick task is cancelled
    /// before the new one spawns.
    pub fn start(&mut self, timer: Arc<Mutex<FocusTimer>>, events: UnboundedSender<Event>) {
        self.stop();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick resolves immediately; consume it so
            // the countdown moves one second after start, not at start.
            interval.tick().await;

            loop {
                interval.tick().await;
                let event = {
                    let mut timer = match timer.lock() {
                        Ok(guard) => guard,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                    timer.tick()
                };
                if let Some(event) = event {
                    if events.send(event).is_err() {
                        // Receiver gone; nothing left to drive.
                        break;
                    }
                }
            }
        });
        self.handle = Some(handle);
    }

    /// Cancel the tick task. Safe to call when nothing is running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether a tick task is currently alive.
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{TimerMode, FOCUS_SECS};
    use tokio::sync::mpsc;

    fn shared_running_timer() -> Arc<Mutex<FocusTimer>> {
        let timer = Arc::new(Mutex::new(FocusTimer::new()));
        timer.lock().unwrap().start(None);
        timer
    }

    async fn settle() {
        // Let the spawned tick task observe advanced time.
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_decrements_each_second() {
        let timer = shared_running_timer();
        let (tx, _rx) = mpsc::unbounded_channel();

        let mut ticker = Ticker::new();
        ticker.start(Arc::clone(&timer), tx);
        settle().await;

        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;

        let remaining = timer.lock().unwrap().remaining_secs();
        assert!(remaining < FOCUS_SECS, "ticks must reach the timer");
        assert!(remaining >= FOCUS_SECS - 4);
        ticker.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn restart_cancels_previous_ticker() {
        let timer = shared_running_timer();
        let (tx, _rx) = mpsc::unbounded_channel();

        let mut ticker = Ticker::new();
        ticker.start(Arc::clone(&timer), tx.clone());
        settle().await;
        // Restart: the old task must be aborted, never two tickers at once.
        ticker.start(Arc::clone(&timer), tx);
        settle().await;

        let before = timer.lock().unwrap().remaining_secs();
        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;
        let after = timer.lock().unwrap().remaining_secs();

        assert!(before - after <= 3, "a second ticker would double the rate");
        ticker.stop();
        assert!(!ticker.is_active() || ticker.handle.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn completion_event_is_forwarded() {
        let timer = Arc::new(Mutex::new(FocusTimer::new()));
        {
            let mut t = timer.lock().unwrap();
            t.start(None);
            // Fast-forward to the last second of the phase.
            for _ in 0..FOCUS_SECS - 1 {
                t.tick();
            }
        }
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new();
        ticker.start(Arc::clone(&timer), tx);
        settle().await;

        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;

        match rx.try_recv() {
            Ok(Event::TimerCompleted { finished, next, .. }) => {
                assert_eq!(finished, TimerMode::Focus);
                assert_eq!(next, TimerMode::Break);
            }
            other => panic!("expected a completion event, got {other:?}"),
        }
        ticker.stop();
    }

    #[tokio::test]
    async fn stop_is_idempotent() {
        let mut ticker = Ticker::new();
        ticker.stop();
        assert!(!ticker.is_active());

        let (tx, _rx) = mpsc::unbounded_channel();
        ticker.start(shared_running_timer(), tx);
        assert!(ticker.is_active());
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_active());
    }
}
