// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_tracker --heading-base-level=0

//! Treeline Tracker: the scroll-visibility registry and check engine.
//!
//! This crate tracks a set of host elements, keeps their measured geometry
//! current, and fires callbacks whenever a view function's computed
//! [`Transit`](treeline_views::Transit) changes. It is host-agnostic: real
//! elements, DOM reads, and event sources stay on the host side of the
//! [`Host`] trait, and elements are identified by a caller-chosen `Copy` key.
//!
//! The core concepts are:
//!
//! - [`Host`]: the pull-model seam through which the tracker reads the
//!   scroll offset, window and document heights, and per-element bounding
//!   rects.
//! - [`VisibilityTracker`]: an explicit context object owning the tracked
//!   items, the scroll position (with deltas), the viewport metrics, and a
//!   [`ViewRegistry`](treeline_views::ViewRegistry). There is no global
//!   state.
//! - [`Target`]: how callers address an item — by element key, or by a
//!   symbolic reference name that may exist before its element does.
//! - [`BindingSpec`]: per-binding options (view name, config overrides,
//!   `should_update` predicate, `flush`/`on_recalculate` refresh hooks).
//! - [`Outcome`]: a callback's verdict about its own binding. Returning
//!   [`Outcome::Unbind`] is how a callback detaches itself; callbacks never
//!   re-enter the registry mid-iteration.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use treeline_tracker::{Host, Outcome, Target, VisibilityTracker};
//!
//! struct Page;
//!
//! impl Host<u32> for Page {
//!     fn scroll_offset(&self) -> Point {
//!         Point::new(0.0, 300.0)
//!     }
//!     fn window_height(&self) -> f64 {
//!         800.0
//!     }
//!     fn document_height(&self) -> f64 {
//!         3000.0
//!     }
//!     fn bounding_rect(&self, _handle: &u32) -> Option<Rect> {
//!         // Viewport-relative: the element sits 700 px below the fold top.
//!         Some(Rect::new(0.0, 700.0, 400.0, 900.0))
//!     }
//! }
//!
//! let mut tracker = VisibilityTracker::new(Page);
//!
//! // Binding immediately evaluates: the element is already in range.
//! let mut seen = 0.0;
//! tracker.bind(Target::handle(1), move |_, transit, _, _| {
//!     seen = transit.progress;
//!     Outcome::Retain
//! });
//! ```
//!
//! Scroll dedupe, negative-offset (overscroll) skipping, and value-change
//! suppression all live in [`VisibilityTracker::check_views`]; debounced
//! resize plumbing lives in the `treeline_coalesce` crate. This crate is
//! `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod host;
mod target;
mod trace;
mod tracker;

pub use binding::{BindingId, BindingSpec, Outcome};
pub use host::{Host, MOBILE_CHROME_ALLOWANCE};
pub use target::Target;
pub use trace::{CheckEvent, CheckLog, CheckTrace};
pub use tracker::VisibilityTracker;
