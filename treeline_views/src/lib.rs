// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_views --heading-base-level=0

//! Treeline Views: pure scroll-visibility view functions.
//!
//! This crate provides the calculation layer of the Treeline visibility
//! tracker: small, side-effect-free functions that map element geometry and
//! scroll state to a normalized progress value. It knows nothing about real
//! elements, event loops, or any particular UI stack; hosts feed it numbers.
//!
//! The core concepts are:
//!
//! - [`Dimensions`]: an element's document-space position and size, always a
//!   full recompute from the host's layout box, never an incremental diff.
//! - [`ScrollPosition`]: the current scroll offset plus the signed change
//!   since the previous accepted reading.
//! - [`Viewport`]: the window height and total document height a view
//!   function measures against.
//! - [`Transit`]: the computed result — how far an element has traveled
//!   through a view's range, as a `[0, 1]` progress scalar and its
//!   pixel-equivalent distance.
//! - [`ViewConfig`] / [`ConfigOverrides`]: the per-binding knobs (`fold
//!   offset`, `bottom offset`, value caching, capping) merged over tracker
//!   defaults.
//! - [`ViewRegistry`]: a by-name registry of view functions. [`outer`] and
//!   [`inner`] are pre-registered; hosts may add their own under new names.
//!
//! ## Minimal example
//!
//! An element 200 px tall sitting 1000 px down a 3000 px document, with an
//! 800 px window scrolled 300 px:
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use treeline_views::{outer, Dimensions, ScrollPosition, ViewConfig, Viewport};
//!
//! let dimensions = Dimensions::from_bounding_rect(
//!     Rect::new(0.0, 700.0, 400.0, 900.0),
//!     Point::new(0.0, 300.0),
//! );
//! let scroll = ScrollPosition::new(Point::new(0.0, 300.0));
//! let viewport = Viewport::new(800.0, 3000.0);
//!
//! let transit = outer(&dimensions, &scroll, &viewport, &ViewConfig::default());
//! assert!((transit.progress - 0.1).abs() < 1e-9);
//! assert!((transit.distance - 100.0).abs() < 1e-9);
//! ```
//!
//! All coordinates live in the host's logical-pixel space and are expected to
//! be finite; degenerate ranges collapse to [`Transit::default`] rather than
//! dividing by zero. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builtin;
mod config;
mod metrics;
mod registry;
mod transit;

pub use builtin::{inner, outer};
pub use config::{ConfigOverrides, ViewConfig};
pub use metrics::{Dimensions, ScrollPosition, Viewport};
pub use registry::{INNER, OUTER, ViewFn, ViewRegistry};
pub use transit::Transit;
