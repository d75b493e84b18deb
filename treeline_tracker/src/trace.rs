// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hooks for check passes.
//!
//! The tracker intentionally stores no history of what it dispatched. For
//! embedders that want to answer "why did (or didn't) this callback fire?",
//! [`VisibilityTracker::check_views_with_trace`](crate::VisibilityTracker::check_views_with_trace)
//! reports every fired and suppressed binding to a [`CheckTrace`] sink, and
//! [`CheckLog`] is a small recorder for tests and debugging overlays.
//! Embedders bridge the sink to their own logging.

use alloc::vec::Vec;

use treeline_views::Transit;

use crate::binding::BindingId;

/// A callback sink for check-pass tracing.
pub trait CheckTrace {
    /// Called when a binding's callback fires with a newly computed value.
    fn fired(&mut self, binding: BindingId, view: &'static str, transit: Transit);

    /// Called when a binding's value was computed but the callback was
    /// suppressed because the value is unchanged and the binding caches.
    fn suppressed(&mut self, binding: BindingId, view: &'static str, transit: Transit);
}

/// The no-op trace used by the plain check entry points.
impl CheckTrace for () {
    fn fired(&mut self, _binding: BindingId, _view: &'static str, _transit: Transit) {}

    fn suppressed(&mut self, _binding: BindingId, _view: &'static str, _transit: Transit) {}
}

/// One traced check-pass event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CheckEvent {
    /// The callback fired with this value.
    Fired {
        /// The binding that fired.
        binding: BindingId,
        /// The view that computed the value.
        view: &'static str,
        /// The emitted value.
        transit: Transit,
    },
    /// The callback was suppressed; the computed value matched the cache.
    Suppressed {
        /// The binding that was suppressed.
        binding: BindingId,
        /// The view that computed the value.
        view: &'static str,
        /// The computed (unchanged) value.
        transit: Transit,
    },
}

/// Records every traced event in order.
#[derive(Debug, Default, Clone)]
pub struct CheckLog {
    events: Vec<CheckEvent>,
}

impl CheckLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[CheckEvent] {
        &self.events
    }

    /// Number of recorded `Fired` events.
    #[must_use]
    pub fn fired_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, CheckEvent::Fired { .. }))
            .count()
    }

    /// Number of recorded `Suppressed` events.
    #[must_use]
    pub fn suppressed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, CheckEvent::Suppressed { .. }))
            .count()
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl CheckTrace for CheckLog {
    fn fired(&mut self, binding: BindingId, view: &'static str, transit: Transit) {
        self.events.push(CheckEvent::Fired {
            binding,
            view,
            transit,
        });
    }

    fn suppressed(&mut self, binding: BindingId, view: &'static str, transit: Transit) {
        self.events.push(CheckEvent::Suppressed {
            binding,
            view,
            transit,
        });
    }
}
