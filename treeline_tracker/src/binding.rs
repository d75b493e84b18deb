// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bindings: a view, a callback, and its change-suppression state.

use alloc::boxed::Box;

use treeline_views::{ConfigOverrides, Dimensions, OUTER, ScrollPosition, Transit, ViewConfig};

/// Identity of one binding, allocated by the tracker at bind time.
///
/// Closures have no usable identity of their own, so precise removal goes
/// through the id returned by
/// [`bind`](crate::VisibilityTracker::bind) /
/// [`bind_with`](crate::VisibilityTracker::bind_with).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

impl BindingId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// A callback's verdict about its own binding after firing.
///
/// Callbacks never get mutable access to the registry; a callback that wants
/// to detach itself returns [`Outcome::Unbind`] and the tracker applies the
/// removal after the iteration pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep the binding.
    Retain,
    /// Remove this binding once the current pass completes.
    Unbind,
}

pub(crate) type VisibleCallback<K> =
    Box<dyn FnMut(K, Transit, &Dimensions, &ScrollPosition) -> Outcome>;

pub(crate) type UpdatePredicate<K> = Box<dyn Fn(K) -> bool>;

pub(crate) type RecalculateHook<K> = Box<dyn FnMut(K)>;

/// Per-binding options for [`bind_with`](crate::VisibilityTracker::bind_with).
///
/// The default spec uses the `outer` view with no config overrides and no
/// hooks, which is what [`bind`](crate::VisibilityTracker::bind) passes.
///
/// # Example
///
/// ```rust
/// use treeline_tracker::BindingSpec;
/// use treeline_views::{ConfigOverrides, INNER};
///
/// let spec: BindingSpec<u32> = BindingSpec::new()
///     .view(INNER)
///     .overrides(ConfigOverrides::new().cap(false))
///     .flush(true);
/// ```
pub struct BindingSpec<K> {
    pub(crate) view: &'static str,
    pub(crate) overrides: ConfigOverrides,
    pub(crate) flush: bool,
    pub(crate) should_update: Option<UpdatePredicate<K>>,
    pub(crate) on_recalculate: Option<RecalculateHook<K>>,
}

impl<K> BindingSpec<K> {
    /// Creates the default spec: the `outer` view, no overrides, no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: OUTER,
            overrides: ConfigOverrides::new(),
            flush: false,
            should_update: None,
            on_recalculate: None,
        }
    }

    /// Selects the view to evaluate, by registry name.
    #[must_use]
    pub fn view(mut self, name: &'static str) -> Self {
        self.view = name;
        self
    }

    /// Sets config overrides merged over the tracker's defaults.
    #[must_use]
    pub fn overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Clears the cached value on every geometry refresh, so the next check
    /// fires the callback even if the computed value is unchanged.
    #[must_use]
    pub fn flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }

    /// Gates evaluation: when the predicate returns `false` the binding is
    /// skipped for that check, leaving its cached value untouched.
    #[must_use]
    pub fn should_update(mut self, predicate: impl Fn(K) -> bool + 'static) -> Self {
        self.should_update = Some(Box::new(predicate));
        self
    }

    /// Hook invoked by the geometry refresher before the element is
    /// re-measured.
    #[must_use]
    pub fn on_recalculate(mut self, hook: impl FnMut(K) + 'static) -> Self {
        self.on_recalculate = Some(Box::new(hook));
        self
    }
}

impl<K> Default for BindingSpec<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> core::fmt::Debug for BindingSpec<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BindingSpec")
            .field("view", &self.view)
            .field("overrides", &self.overrides)
            .field("flush", &self.flush)
            .field("should_update", &self.should_update.is_some())
            .field("on_recalculate", &self.on_recalculate.is_some())
            .finish()
    }
}

/// One registered callback on a tracked item.
pub(crate) struct Binding<K> {
    pub(crate) id: BindingId,
    pub(crate) view: &'static str,
    pub(crate) config: ViewConfig,
    pub(crate) flush: bool,
    pub(crate) should_update: Option<UpdatePredicate<K>>,
    pub(crate) on_recalculate: Option<RecalculateHook<K>>,
    pub(crate) callback: VisibleCallback<K>,
    pub(crate) last: Option<Transit>,
    pub(crate) dead: bool,
}
