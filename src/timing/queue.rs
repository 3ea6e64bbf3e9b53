//! Delayed-task queue on a virtual clock.

use std::collections::BTreeMap;
use std::time::Duration;

use super::{Scheduler, Timer, TimerId};

/// Timer queue driven by explicit clock advances.
///
/// The clock starts at zero and only moves when the owner calls
/// [`advance`](DelayQueue::advance), [`pop_due`](DelayQueue::pop_due) or
/// [`fire_next`](DelayQueue::fire_next). Entries are keyed by
/// `(deadline, id)`, so ties fire in scheduling order.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use rust_memo::timing::{DelayQueue, Scheduler, Signal, Timer};
///
/// let mut queue = DelayQueue::new();
/// let timer = Timer { signal: Signal::Conceal, generation: 0 };
/// queue.schedule(Duration::from_millis(1000), timer);
///
/// assert!(queue.advance(Duration::from_millis(999)).is_empty());
/// assert_eq!(queue.advance(Duration::from_millis(1)).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DelayQueue {
    now: Duration,
    next_id: u64,
    entries: BTreeMap<(Duration, TimerId), Timer>,
}

impl DelayQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock moves to that timer's deadline, so anything scheduled while
    /// handling it is measured from the moment it fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, Timer)> {
        let (&(deadline, id), _) = self.entries.iter().next()?;
        if deadline > until {
            return None;
        }
        let timer = self.entries.remove(&(deadline, id))?;
        self.now = self.now.max(deadline);
        Some((id, timer))
    }

    /// Move the clock forward without firing anything still pending.
    ///
    /// Never moves the clock backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Advance the clock by `elapsed` and return every timer that came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<(TimerId, Timer)> {
        let until = self.now + elapsed;
        let mut fired = Vec::new();
        while let Some(entry) = self.pop_due(until) {
            fired.push(entry);
        }
        self.set_now(until);
        fired
    }

    /// Jump the clock to the earliest deadline and fire that timer.
    pub fn fire_next(&mut self) -> Option<(TimerId, Timer)> {
        let deadline = self.next_deadline()?;
        self.pop_due(deadline)
    }
}

impl Scheduler for DelayQueue {
    fn schedule(&mut self, delay: Duration, timer: Timer) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.insert((self.now + delay, id), timer);
        log::trace!("scheduled {id} {:?} in {delay:?}", timer.signal);
        id
    }

    fn cancel_all(&mut self) {
        if !self.entries.is_empty() {
            log::trace!("cancelled {} pending timers", self.entries.len());
        }
        self.entries.clear();
    }

    fn pending(&self) -> usize {
        self.entries.len()
    }
}
