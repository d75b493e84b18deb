// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Addressing tracked items.

use alloc::string::String;

/// How a tracked item is addressed at the API boundary.
///
/// Items usually go by their element key, but an item can also be addressed
/// by a symbolic reference name — including before any element exists under
/// that name, in which case bindings accumulate on a placeholder until
/// [`set_reference`](crate::VisibilityTracker::set_reference) attaches the
/// element and merges them over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target<K> {
    /// Address an item by its element key.
    Handle(K),
    /// Address an item by its symbolic reference name.
    Name(String),
}

impl<K> Target<K> {
    /// Targets an item by element key.
    #[must_use]
    pub fn handle(handle: K) -> Self {
        Self::Handle(handle)
    }

    /// Targets an item by reference name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}
