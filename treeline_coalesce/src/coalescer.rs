// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signal recording and draining.

use smallvec::SmallVec;

use crate::debounce::{Debounce, Millis};

/// Trailing delay for resize and orientation-change bursts.
pub const RESIZE_DEBOUNCE_MS: Millis = 300;

/// What the host glue should run against its tracker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Run `VisibilityTracker::recalculate`: re-read viewport metrics and
    /// re-measure every element.
    Recalculate,
    /// Run `VisibilityTracker::check_views(use_cache)`.
    CheckViews {
        /// Whether the unchanged-scroll short-circuit applies. `true` on the
        /// scroll path, `false` after a refresh.
        use_cache: bool,
    },
}

/// Coalesces host input signals into at most two [`Action`]s per poll.
///
/// Wire the host's events to the recording methods and drain with
/// [`poll`](Coalescer::poll):
///
/// - scroll events → [`scroll`](Coalescer::scroll): a cache-checked views
///   pass, deduped per poll no matter how many events arrived.
/// - resize / orientation change → [`resize`](Coalescer::resize) /
///   [`orientation_change`](Coalescer::orientation_change): a trailing
///   debounced refresh (recalculate, then a cache-bypassed check). Hosts
///   whose resize already fires settled (iOS-class browsers, where resize
///   accompanies the chrome collapsing) construct with
///   [`with_resize_debounce`](Coalescer::with_resize_debounce)`(0)` to
///   refresh immediately.
/// - page load / host animation settling → [`load`](Coalescer::load) /
///   [`animation_done`](Coalescer::animation_done): an immediate refresh.
///
/// A due refresh subsumes a pending scroll check: it already ends in a
/// cache-bypassed check of everything.
#[derive(Debug, Default, Clone)]
pub struct Coalescer {
    resize_debounce_ms: Millis,
    refresh: Debounce,
    refresh_now: bool,
    scroll_pending: bool,
}

impl Coalescer {
    /// Creates a coalescer with the standard [`RESIZE_DEBOUNCE_MS`] trailing
    /// delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resize_debounce(RESIZE_DEBOUNCE_MS)
    }

    /// Creates a coalescer with a custom resize/orientation trailing delay.
    /// Zero refreshes on the next poll with no waiting.
    #[must_use]
    pub fn with_resize_debounce(resize_debounce_ms: Millis) -> Self {
        Self {
            resize_debounce_ms,
            refresh: Debounce::new(),
            refresh_now: false,
            scroll_pending: false,
        }
    }

    /// Records a scroll event.
    pub fn scroll(&mut self) {
        self.scroll_pending = true;
    }

    /// Records a resize event at tick `now`.
    pub fn resize(&mut self, now: Millis) {
        self.refresh_after(now, Some(self.resize_debounce_ms));
    }

    /// Records an orientation change at tick `now`.
    pub fn orientation_change(&mut self, now: Millis) {
        self.refresh_after(now, Some(self.resize_debounce_ms));
    }

    /// Records page load: refresh on the next poll.
    pub fn load(&mut self) {
        self.refresh_after(0, None);
    }

    /// Records the host's "animation finished" signal: refresh on the next
    /// poll.
    pub fn animation_done(&mut self) {
        self.refresh_after(0, None);
    }

    /// Requests a refresh, optionally debounced — the public
    /// recalculate-plus-check convenience.
    ///
    /// `None` or `Some(0)` refreshes on the next poll; `Some(delay)` arms the
    /// shared deadline, replacing whatever was pending.
    pub fn refresh(&mut self, now: Millis, debounce_ms: Option<Millis>) {
        self.refresh_after(now, debounce_ms);
    }

    /// Returns `true` if a poll now or later would produce actions.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.refresh_now || self.refresh.is_pending() || self.scroll_pending
    }

    /// Drains the due actions for tick `now`, in application order.
    pub fn poll(&mut self, now: Millis) -> SmallVec<[Action; 2]> {
        let mut actions = SmallVec::new();
        if self.refresh_now || self.refresh.poll(now) {
            self.refresh_now = false;
            // The refresh ends in a cache-bypassed check; a queued scroll
            // check would be a strict subset of it.
            self.scroll_pending = false;
            actions.push(Action::Recalculate);
            actions.push(Action::CheckViews { use_cache: false });
        } else if self.scroll_pending {
            self.scroll_pending = false;
            actions.push(Action::CheckViews { use_cache: true });
        }
        actions
    }

    fn refresh_after(&mut self, now: Millis, debounce_ms: Option<Millis>) {
        match debounce_ms {
            None | Some(0) => {
                self.refresh_now = true;
                self.refresh.cancel();
            }
            Some(delay) => self.refresh.schedule(now, delay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_bursts_dedupe_to_one_check() {
        let mut coalescer = Coalescer::new();
        for _ in 0..20 {
            coalescer.scroll();
        }

        let actions = coalescer.poll(0);
        assert_eq!(actions.as_slice(), &[Action::CheckViews { use_cache: true }]);
        assert!(coalescer.poll(1).is_empty());
    }

    #[test]
    fn resize_bursts_collapse_into_one_trailing_refresh() {
        let mut coalescer = Coalescer::new();
        coalescer.resize(0);
        coalescer.resize(100);
        coalescer.resize(200);

        assert!(coalescer.poll(400).is_empty());
        let actions = coalescer.poll(500);
        assert_eq!(
            actions.as_slice(),
            &[Action::Recalculate, Action::CheckViews { use_cache: false }],
        );
        assert!(!coalescer.has_pending());
    }

    #[test]
    fn refresh_subsumes_a_pending_scroll_check() {
        let mut coalescer = Coalescer::new();
        coalescer.scroll();
        coalescer.load();

        let actions = coalescer.poll(0);
        assert_eq!(
            actions.as_slice(),
            &[Action::Recalculate, Action::CheckViews { use_cache: false }],
        );
        assert!(coalescer.poll(1).is_empty());
    }

    #[test]
    fn scroll_check_still_runs_while_a_refresh_is_armed() {
        let mut coalescer = Coalescer::new();
        coalescer.resize(0);
        coalescer.scroll();

        let actions = coalescer.poll(100);
        assert_eq!(actions.as_slice(), &[Action::CheckViews { use_cache: true }]);

        let actions = coalescer.poll(300);
        assert_eq!(
            actions.as_slice(),
            &[Action::Recalculate, Action::CheckViews { use_cache: false }],
        );
    }

    #[test]
    fn zero_debounce_refreshes_on_next_poll() {
        let mut coalescer = Coalescer::with_resize_debounce(0);
        coalescer.resize(1000);

        let actions = coalescer.poll(1000);
        assert_eq!(
            actions.as_slice(),
            &[Action::Recalculate, Action::CheckViews { use_cache: false }],
        );
    }

    #[test]
    fn immediate_refresh_replaces_an_armed_deadline() {
        let mut coalescer = Coalescer::new();
        coalescer.resize(0);
        coalescer.refresh(50, None);

        let actions = coalescer.poll(60);
        assert_eq!(actions.len(), 2);
        // The armed deadline was replaced; nothing re-fires at 300.
        assert!(coalescer.poll(400).is_empty());
    }

    #[test]
    fn explicit_debounced_refresh_uses_the_given_delay() {
        let mut coalescer = Coalescer::new();
        coalescer.refresh(0, Some(1000));

        assert!(coalescer.poll(500).is_empty());
        assert!(coalescer.has_pending());
        assert_eq!(coalescer.poll(1000).len(), 2);
    }

    #[test]
    fn orientation_change_behaves_like_resize() {
        let mut coalescer = Coalescer::new();
        coalescer.orientation_change(0);

        assert!(coalescer.poll(299).is_empty());
        assert_eq!(coalescer.poll(300).len(), 2);
    }
}
