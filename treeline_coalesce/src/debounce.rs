// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single replaceable deadline over a host-supplied clock.

/// Milliseconds on the host's monotonic clock.
pub type Millis = u64;

/// Trailing-edge debounce: one pending deadline, last write wins.
///
/// There is no task queue behind this; [`schedule`](Debounce::schedule)
/// replaces whatever deadline was pending, which is the whole cancellation
/// contract. The host drives it by calling [`poll`](Debounce::poll) with the
/// current tick.
///
/// # Example
///
/// ```rust
/// use treeline_coalesce::Debounce;
///
/// let mut debounce = Debounce::new();
/// debounce.schedule(0, 300);
/// debounce.schedule(200, 300); // replaces the first deadline
///
/// assert!(!debounce.poll(300)); // the original deadline no longer exists
/// assert!(debounce.poll(500));
/// assert!(!debounce.is_pending());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Debounce {
    deadline: Option<Millis>,
}

impl Debounce {
    /// Creates a debounce with no pending deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a deadline `delay` ticks from `now`, replacing any pending one.
    pub fn schedule(&mut self, now: Millis, delay: Millis) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a deadline is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline tick, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    /// Fires if the deadline has passed: returns `true` at most once per
    /// scheduled deadline, disarming it.
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_the_delay() {
        let mut debounce = Debounce::new();
        debounce.schedule(100, 300);

        assert!(!debounce.poll(100));
        assert!(!debounce.poll(399));
        assert!(debounce.poll(400));
        assert!(!debounce.poll(400));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn rescheduling_replaces_the_deadline() {
        let mut debounce = Debounce::new();
        debounce.schedule(0, 300);
        debounce.schedule(250, 300);

        assert_eq!(debounce.deadline(), Some(550));
        assert!(!debounce.poll(300));
        assert!(debounce.poll(550));
    }

    #[test]
    fn cancel_disarms() {
        let mut debounce = Debounce::new();
        debounce.schedule(0, 10);
        debounce.cancel();

        assert!(!debounce.is_pending());
        assert!(!debounce.poll(1000));
    }

    #[test]
    fn zero_delay_fires_on_the_same_tick() {
        let mut debounce = Debounce::new();
        debounce.schedule(42, 0);
        assert!(debounce.poll(42));
    }

    #[test]
    fn deadline_saturates_instead_of_wrapping() {
        let mut debounce = Debounce::new();
        debounce.schedule(Millis::MAX - 1, 300);
        assert_eq!(debounce.deadline(), Some(Millis::MAX));
    }
}
