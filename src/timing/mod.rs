//! Fixed-delay, fire-once timers.
//!
//! The engine never sleeps. When a pair is face up it asks for a `Conceal`
//! signal after the reveal delay; when the last pair is matched it asks for
//! a `Victory` signal after the win delay. A [`Scheduler`] turns those
//! requests into callbacks later on.
//!
//! Front ends with their own timer facility (a GUI event loop, an async
//! runtime) implement `Scheduler` and hand fired timers back to the session.
//! [`DelayQueue`] is the built-in implementation: a virtual clock advanced
//! by the caller, which also makes timed behaviour testable without waiting.
//!
//! Every timer is stamped with the session's game generation. A timer that
//! outlives its game (the session was reconfigured in between) is dropped
//! when it fires.

mod queue;

pub use queue::DelayQueue;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// Resolve the two revealed tiles.
    Conceal,
    /// Announce the finished game.
    Victory,
}

/// A timer the engine wants scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    pub signal: Signal,
    pub delay: Duration,
}

/// A scheduled timer's payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timer {
    pub signal: Signal,
    /// Game generation the timer belongs to.
    pub generation: u64,
}

/// Handle for a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Schedules single-shot timers.
///
/// Implementations must fire each timer at most once, no earlier than its
/// delay. Timers with equal deadlines fire in scheduling order.
pub trait Scheduler {
    /// Schedule `timer` to fire after `delay`.
    fn schedule(&mut self, delay: Duration, timer: Timer) -> TimerId;

    /// Drop every pending timer.
    fn cancel_all(&mut self);

    /// Number of timers that have not fired yet.
    fn pending(&self) -> usize;
}
