// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host adapter the tracker reads geometry through.

use kurbo::{Point, Rect};

/// Fixed window-height inflation for mobile browsers with collapsing chrome.
///
/// On iOS-class browsers the reported window height changes as the URL bar
/// shows and hides, which would make progress values jump mid-scroll. Hosts
/// on such environments return this from [`Host::chrome_allowance`] so
/// computations use a stable, slightly inflated height. The value is the
/// collapsed-versus-expanded chrome delta; it is an environment-specific
/// correction factor, not a general rule.
pub const MOBILE_CHROME_ALLOWANCE: f64 = 68.0;

/// Where a [`VisibilityTracker`](crate::VisibilityTracker) reads geometry.
///
/// Hosts own the real elements and the layout engine; the tracker pulls
/// everything it needs through this trait. Elements are identified by a
/// caller-chosen key type `K` (an id, slot index, or similar `Copy` value).
///
/// All lengths are logical pixels. `bounding_rect` is viewport-relative —
/// the moral equivalent of `getBoundingClientRect` — and returns `None` for
/// keys the host no longer knows, which the tracker treats as "leave the
/// cached measurement alone".
pub trait Host<K> {
    /// Current scroll offset. Negative components are treated as an invalid
    /// reading (overscroll bounce) and skip the check cycle.
    fn scroll_offset(&self) -> Point;

    /// Visible window height.
    fn window_height(&self) -> f64;

    /// Total scrollable document height.
    fn document_height(&self) -> f64;

    /// Viewport-relative bounding rect for an element, if it is laid out.
    fn bounding_rect(&self, handle: &K) -> Option<Rect>;

    /// Extra height added to [`window_height`](Self::window_height) before
    /// use. Defaults to zero; mobile hosts with collapsing browser chrome
    /// return [`MOBILE_CHROME_ALLOWANCE`].
    fn chrome_allowance(&self) -> f64 {
        0.0
    }
}
