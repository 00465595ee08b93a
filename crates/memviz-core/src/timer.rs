//! Cancellable one-shot timers.
//!
//! A timer is a deadline handle owned by the state it will mutate. The event
//! loop polls it with the current time; it fires at most once per schedule.
//! Cancelling invalidates the deadline, so a late poll after teardown is a
//! no-op.

use std::time::{Duration, Instant};

use tracing::{trace, warn};

/// Lifecycle of a [`OneShotTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    /// Never scheduled.
    #[default]
    Idle,
    /// Waiting for its deadline.
    Pending { fires_at: Instant },
    /// Deadline reached and reported by [`OneShotTimer::poll`].
    Fired { at: Instant },
    /// Cancelled before firing.
    Cancelled,
}

/// A deadline that fires once when polled at or after it.
#[derive(Debug, Clone, Default)]
pub struct OneShotTimer {
    state: TimerState,
}

impl OneShotTimer {
    /// Create an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending deadline.
    ///
    /// A deadline past the range of [`Instant`] cannot be reached, so the
    /// timer ends up cancelled instead.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        let Some(fires_at) = now.checked_add(delay) else {
            warn!(?delay, "timer delay out of range");
            self.state = TimerState::Cancelled;
            return;
        };
        trace!(?delay, "timer scheduled");
        self.state = TimerState::Pending { fires_at };
    }

    /// Cancel a pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        if self.is_pending() {
            trace!("timer cancelled");
            self.state = TimerState::Cancelled;
            true
        } else {
            false
        }
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            TimerState::Pending { fires_at } if now >= fires_at => {
                self.state = TimerState::Fired { at: now };
                true
            }
            _ => false,
        }
    }

    /// Whether a deadline is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, TimerState::Pending { .. })
    }

    /// Time left before the deadline, if pending.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            TimerState::Pending { fires_at } => Some(fires_at.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }
}
