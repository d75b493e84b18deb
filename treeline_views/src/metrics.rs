// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry inputs consumed by view functions.

use kurbo::{Point, Rect};

/// An element's measured geometry.
///
/// `top` and `left` are document-space offsets: the host's viewport-relative
/// bounding rect translated by the scroll offset in effect at measure time.
/// The raw rect is kept alongside for hosts that want viewport-relative
/// coordinates back.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Dimensions {
    /// Distance from the document top to the element's top edge.
    pub top: f64,
    /// Distance from the document left edge to the element's left edge.
    pub left: f64,
    /// Element width in logical pixels.
    pub width: f64,
    /// Element height in logical pixels.
    pub height: f64,
    /// The viewport-relative bounding rect this measurement was taken from.
    pub bounding_rect: Rect,
}

impl Dimensions {
    /// Builds dimensions from a viewport-relative bounding rect and the
    /// scroll offset in effect when the rect was read.
    #[must_use]
    pub fn from_bounding_rect(rect: Rect, scroll_offset: Point) -> Self {
        Self {
            top: rect.y0 + scroll_offset.y,
            left: rect.x0 + scroll_offset.x,
            width: rect.width(),
            height: rect.height(),
            bounding_rect: rect,
        }
    }

    /// Document-space offset of the element's bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Current scroll offset plus the signed change since the previous reading.
///
/// The deltas let directional logic (for example parallax that only reacts to
/// downward movement) ride along with every check without the host tracking
/// a previous position itself.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    /// Horizontal scroll offset.
    pub x: f64,
    /// Vertical scroll offset.
    pub y: f64,
    /// Signed horizontal change since the previous reading.
    pub delta_x: f64,
    /// Signed vertical change since the previous reading.
    pub delta_y: f64,
}

impl ScrollPosition {
    /// Creates a scroll position at `offset` with zero deltas.
    #[must_use]
    pub fn new(offset: Point) -> Self {
        Self {
            x: offset.x,
            y: offset.y,
            delta_x: 0.0,
            delta_y: 0.0,
        }
    }

    /// Returns the current offset as a point.
    #[must_use]
    pub fn offset(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Moves to `offset`, recording the signed change as the new deltas.
    pub fn advance_to(&mut self, offset: Point) {
        self.delta_x = offset.x - self.x;
        self.delta_y = offset.y - self.y;
        self.x = offset.x;
        self.y = offset.y;
    }
}

/// The viewing region a view function measures against.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Visible window height in logical pixels.
    pub window_height: f64,
    /// Total scrollable document height in logical pixels.
    pub document_height: f64,
}

impl Viewport {
    /// Creates a viewport from a window height and document height.
    #[must_use]
    pub fn new(window_height: f64, document_height: f64) -> Self {
        Self {
            window_height,
            document_height,
        }
    }
}
