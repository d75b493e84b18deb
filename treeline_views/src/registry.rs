// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! By-name registry of view functions.
//!
//! Bindings refer to views by name so that hosts can register their own
//! calculations next to the built-in ones and reuse them across elements.
//! The registry is agnostic to a view's implementation; anything with the
//! view signature can live under a name.

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::builtin;
use crate::config::ViewConfig;
use crate::metrics::{Dimensions, ScrollPosition, Viewport};
use crate::transit::Transit;

/// Name of the built-in [`outer`](builtin::outer) view.
pub const OUTER: &str = "outer";

/// Name of the built-in [`inner`](builtin::inner) view.
pub const INNER: &str = "inner";

/// The shared signature of every view function.
///
/// Implemented automatically for any matching `Fn`; custom views are plain
/// functions or capturing closures with this shape.
pub trait ViewFn:
    Fn(&Dimensions, &ScrollPosition, &Viewport, &ViewConfig) -> Transit
{
}

impl<F> ViewFn for F where
    F: Fn(&Dimensions, &ScrollPosition, &Viewport, &ViewConfig) -> Transit
{
}

/// A registry of named view functions.
///
/// # Example
///
/// ```rust
/// use treeline_views::{Transit, ViewRegistry, OUTER};
///
/// let mut registry = ViewRegistry::new();
/// assert!(registry.contains(OUTER));
///
/// // A custom view that only reports whether the element top has scrolled by.
/// registry.register("sticky", |dimensions, scroll, _, _| {
///     let offset = (scroll.y - dimensions.top).max(0.0);
///     Transit::new(if offset > 0.0 { 1.0 } else { 0.0 }, offset)
/// });
/// assert!(registry.contains("sticky"));
/// ```
pub struct ViewRegistry {
    views: HashMap<&'static str, Box<dyn ViewFn>>,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRegistry {
    /// Creates a registry with [`OUTER`] and [`INNER`] pre-registered.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(OUTER, builtin::outer);
        registry.register(INNER, builtin::inner);
        registry
    }

    /// Creates a registry with no views at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    /// Registers `view` under `name`.
    ///
    /// # Panics
    ///
    /// Panics if a view with the same name is already registered.
    pub fn register(&mut self, name: &'static str, view: impl ViewFn + 'static) {
        assert!(
            !self.views.contains_key(name),
            "view '{name}' is already registered"
        );
        self.views.insert(name, Box::new(view));
    }

    /// Looks up a view by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn ViewFn> {
        self.views.get(name).map(|view| &**view)
    }

    /// Returns `true` if a view is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Returns the number of registered views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Returns `true` if no views are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl core::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("count", &self.views.len())
            .field("views", &self.views.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn builtins_are_preregistered() {
        let registry = ViewRegistry::new();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(OUTER));
        assert!(registry.contains(INNER));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn empty_registry_has_no_views() {
        let registry = ViewRegistry::empty();
        assert!(registry.is_empty());
        assert!(!registry.contains(OUTER));
    }

    #[test]
    fn custom_views_resolve_by_name() {
        let mut registry = ViewRegistry::empty();
        registry.register("half", |_, _, _, _| Transit::new(0.5, 50.0));

        let view = registry.get("half").unwrap();
        let transit = view(
            &Dimensions::default(),
            &ScrollPosition::default(),
            &Viewport::default(),
            &ViewConfig::default(),
        );
        assert_eq!(transit, Transit::new(0.5, 50.0));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn duplicate_registration_panics() {
        let mut registry = ViewRegistry::new();
        registry.register(OUTER, |_, _, _, _| Transit::default());
    }

    #[test]
    fn debug_lists_view_names() {
        let registry = ViewRegistry::new();
        let debug = format!("{registry:?}");
        assert!(debug.contains("ViewRegistry"), "debug output: {debug}");
        assert!(debug.contains("outer"), "debug output: {debug}");
    }
}
