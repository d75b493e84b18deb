// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_coalesce --heading-base-level=0

//! Treeline Coalesce: host-agnostic signal coalescing for visibility checks.
//!
//! Scroll and resize events arrive in bursts far faster than visibility
//! values meaningfully change. This crate turns those bursts into a small,
//! deterministic stream of [`Action`]s for host glue to apply to a
//! `treeline_tracker::VisibilityTracker`, without owning a timer, an event
//! loop, or any platform type. The host supplies time as a monotonic
//! millisecond tick and calls [`Coalescer::poll`] whenever convenient
//! (a frame callback, an idle task, the event handler itself).
//!
//! The core concepts are:
//!
//! - [`Debounce`]: one replaceable deadline. Scheduling cancels the previous
//!   deadline and arms a new one — last write wins, nothing queues.
//! - [`Coalescer`]: records scroll/resize/orientation/load signals and
//!   drains them as at most two [`Action`]s per poll. A due refresh subsumes
//!   any pending scroll check, since it ends in a cache-bypassed check
//!   anyway.
//!
//! ## Minimal example
//!
//! ```rust
//! use treeline_coalesce::{Action, Coalescer};
//!
//! let mut coalescer = Coalescer::new();
//!
//! // A burst of resize events collapses into one trailing refresh.
//! coalescer.resize(0);
//! coalescer.resize(120);
//! coalescer.resize(250);
//! assert!(coalescer.poll(260).is_empty());
//!
//! let actions = coalescer.poll(560);
//! assert_eq!(
//!     actions.as_slice(),
//!     &[Action::Recalculate, Action::CheckViews { use_cache: false }],
//! );
//! ```
//!
//! This crate is `no_std`; it does not allocate beyond the inline capacity
//! of the drained action list.

#![no_std]

mod coalescer;
mod debounce;

pub use coalescer::{Action, Coalescer, RESIZE_DEBOUNCE_MS};
pub use debounce::{Debounce, Millis};
