// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in `outer` and `inner` view functions.

use crate::config::ViewConfig;
use crate::metrics::{Dimensions, ScrollPosition, Viewport};
use crate::transit::Transit;

/// Travel of the element through the viewport, counting its own height.
///
/// Progress is 0 while the element sits fully below the viewport and reaches
/// 1 once it has fully passed above it, so the range is `window_height +
/// height`. With `fold_offset`, the range shrinks by however much of the
/// element starts above the fold, so above-the-fold elements still begin at
/// progress 0.
#[must_use]
pub fn outer(
    dimensions: &Dimensions,
    scroll: &ScrollPosition,
    viewport: &Viewport,
    config: &ViewConfig,
) -> Transit {
    let mut range = viewport.window_height + dimensions.height;
    if config.fold_offset && dimensions.top < viewport.window_height {
        range -= viewport.window_height - dimensions.top;
    }

    let traveled = range - (dimensions.bottom() - scroll.y);
    let bottom_room = viewport.document_height - dimensions.top;

    resolve(range, traveled, bottom_room, config)
}

/// Travel of the element across the inside of the viewport.
///
/// The element's own height does not count toward the range unless it exceeds
/// the viewport height, in which case the range is the height itself and the
/// fold adjustment's sign mirrors. Progress is 0 when the bottom edge enters
/// the viewport and 1 once the top edge leaves it.
#[must_use]
pub fn inner(
    dimensions: &Dimensions,
    scroll: &ScrollPosition,
    viewport: &Viewport,
    config: &ViewConfig,
) -> Transit {
    let mut range = if dimensions.height < viewport.window_height {
        viewport.window_height - dimensions.height
    } else {
        dimensions.height
    };
    if config.fold_offset && dimensions.top < viewport.window_height {
        range -= viewport.window_height - dimensions.bottom();
    }

    let traveled = range - (dimensions.top - scroll.y);
    let bottom_room = viewport.document_height - dimensions.bottom();

    resolve(range, traveled, bottom_room, config)
}

/// Turns a raw traveled distance into a [`Transit`].
///
/// `bottom_room` is how much document remains below the view's anchor; when
/// it is shorter than the range, progress rescales so 1 lands exactly at the
/// bottom of the page. The rescale only applies for `0 < bottom_room < range`
/// (a non-positive room would flip the sign or divide by zero). Degenerate
/// ranges yield the default transit.
fn resolve(range: f64, traveled: f64, bottom_room: f64, config: &ViewConfig) -> Transit {
    if !range.is_finite() || range <= 0.0 {
        return Transit::default();
    }

    let mut progress = traveled / range;

    if config.bottom_offset && bottom_room > 0.0 && bottom_room < range {
        progress *= range / bottom_room;
    }

    if config.cap {
        progress = progress.clamp(0.0, 1.0);
    }

    Transit::new(progress, progress * range)
}
