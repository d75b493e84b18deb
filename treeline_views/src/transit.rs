// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value a view function produces.

/// How far an element has traveled through a view's range.
///
/// `progress` is normalized over the range (clamped to `[0, 1]` when the
/// binding's `cap` configuration is set, unbounded otherwise) and `distance`
/// is its pixel-equivalent within the same range. Equality comparison is what
/// drives change suppression: a callback whose binding caches values only
/// fires when the newly computed `Transit` differs from the last one emitted.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transit {
    /// Normalized travel through the view's range.
    pub progress: f64,
    /// Pixels traveled through the view's range.
    pub distance: f64,
}

impl Transit {
    /// Creates a transit value from a progress scalar and pixel distance.
    #[must_use]
    pub fn new(progress: f64, distance: f64) -> Self {
        Self { progress, distance }
    }
}
