// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tracker context: item list, scroll state, and the check engine.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;
use treeline_views::{
    Dimensions, ScrollPosition, Transit, ViewConfig, ViewRegistry, Viewport,
};

use crate::binding::{Binding, BindingId, BindingSpec, Outcome};
use crate::host::Host;
use crate::target::Target;
use crate::trace::CheckTrace;

/// One observed element (or a name-only placeholder awaiting one).
struct TrackedItem<K> {
    handle: Option<K>,
    name: Option<String>,
    bindings: SmallVec<[Binding<K>; 2]>,
    dimensions: Option<Dimensions>,
}

impl<K> TrackedItem<K> {
    fn for_handle(handle: K) -> Self {
        Self {
            handle: Some(handle),
            name: None,
            bindings: SmallVec::new(),
            dimensions: None,
        }
    }

    fn for_name(name: String) -> Self {
        Self {
            handle: None,
            name: Some(name),
            bindings: SmallVec::new(),
            dimensions: None,
        }
    }

    /// Stranded items (no bindings, no name to resolve) have nothing left to
    /// do and are destroyed.
    fn is_stranded(&self) -> bool {
        self.bindings.is_empty() && self.name.is_none()
    }
}

/// The visibility-tracking context.
///
/// Owns the tracked items, the scroll position (with deltas), the viewport
/// metrics, the view registry, and the host adapter — everything the old
/// process-wide singletons held, made explicit. Operations address items via
/// [`Target`]; absent targets are silent no-ops throughout, since absence is
/// not an error in this domain.
///
/// See the crate docs for a minimal end-to-end example.
pub struct VisibilityTracker<K, H> {
    host: H,
    views: ViewRegistry,
    defaults: ViewConfig,
    items: Vec<TrackedItem<K>>,
    scroll: ScrollPosition,
    viewport: Viewport,
    next_binding: u64,
}

impl<K, H> VisibilityTracker<K, H>
where
    K: Copy + PartialEq + 'static,
    H: Host<K>,
{
    /// Creates a tracker over `host` with the built-in views and default
    /// configuration.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_views(host, ViewRegistry::new())
    }

    /// Creates a tracker with a caller-assembled view registry.
    #[must_use]
    pub fn with_views(host: H, views: ViewRegistry) -> Self {
        let scroll = ScrollPosition::new(host.scroll_offset());
        let viewport = Viewport::new(
            host.window_height() + host.chrome_allowance(),
            host.document_height(),
        );
        Self {
            host,
            views,
            defaults: ViewConfig::default(),
            items: Vec::new(),
            scroll,
            viewport,
            next_binding: 0,
        }
    }

    /// Returns the host adapter.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host adapter mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the view registry.
    #[must_use]
    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    /// Returns the view registry mutably, for registering custom views.
    pub fn views_mut(&mut self) -> &mut ViewRegistry {
        &mut self.views
    }

    /// Returns the default configuration merged under every binding.
    #[must_use]
    pub fn defaults(&self) -> ViewConfig {
        self.defaults
    }

    /// Replaces the default configuration. Existing bindings keep the config
    /// they were created with.
    pub fn set_defaults(&mut self, defaults: ViewConfig) {
        self.defaults = defaults;
    }

    /// The scroll position as of the last accepted check.
    #[must_use]
    pub fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    /// The viewport metrics as of the last geometry refresh.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of tracked items, placeholders included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Binds `callback` to `target` under the default [`BindingSpec`]
    /// (the `outer` view, tracker-default configuration).
    ///
    /// The target's item is created if needed — including a name-only
    /// placeholder when the target is an unknown name. Binding triggers an
    /// immediate re-check of all items, since the new binding may already be
    /// visible.
    pub fn bind(
        &mut self,
        target: Target<K>,
        callback: impl FnMut(K, Transit, &Dimensions, &ScrollPosition) -> Outcome + 'static,
    ) -> BindingId {
        self.bind_with(target, BindingSpec::new(), callback)
    }

    /// Binds `callback` to `target` with explicit per-binding options.
    pub fn bind_with(
        &mut self,
        target: Target<K>,
        spec: BindingSpec<K>,
        callback: impl FnMut(K, Transit, &Dimensions, &ScrollPosition) -> Outcome + 'static,
    ) -> BindingId {
        let id = BindingId::new(self.next_binding);
        self.next_binding += 1;

        let config = self.defaults.with_overrides(&spec.overrides);
        let index = self.ensure_item(&target);
        self.items[index].bindings.push(Binding {
            id,
            view: spec.view,
            config,
            flush: spec.flush,
            should_update: spec.should_update,
            on_recalculate: spec.on_recalculate,
            callback: Box::new(callback),
            last: None,
            dead: false,
        });

        // The added binding may already be visible; other items may also be
        // affected by whatever layout change prompted the bind.
        self.check_pass(None, false, &mut ());
        id
    }

    /// Removes `target`'s item entirely, bindings and all.
    pub fn unbind(&mut self, target: &Target<K>) {
        if let Some(index) = self.find(target) {
            self.items.remove(index);
        }
    }

    /// Removes every binding on `target` that evaluates `view`.
    pub fn unbind_view(&mut self, target: &Target<K>, view: &str) {
        if let Some(index) = self.find(target) {
            self.items[index].bindings.retain(|binding| binding.view != view);
            if self.items[index].is_stranded() {
                self.items.remove(index);
            }
        }
    }

    /// Removes the single binding identified by `id`.
    pub fn unbind_binding(&mut self, id: BindingId) {
        for index in 0..self.items.len() {
            let bindings = &mut self.items[index].bindings;
            let before = bindings.len();
            bindings.retain(|binding| binding.id != id);
            if bindings.len() != before {
                if self.items[index].is_stranded() {
                    self.items.remove(index);
                }
                return;
            }
        }
    }

    /// Entry point for the host's element-destruction signal.
    pub fn notify_destroyed(&mut self, handle: K) {
        self.unbind(&Target::Handle(handle));
    }

    /// Attaches the reference name `name` to `handle`'s item.
    ///
    /// If bindings were previously registered purely against the name, they
    /// merge onto the element's item (after any it already has) and the
    /// placeholder is discarded — nothing is lost. If the name currently
    /// belongs to a different attached element, the name moves and that
    /// item's bindings stay where they are. Names stay unique either way.
    pub fn set_reference(&mut self, handle: K, name: impl Into<String>) {
        let name = name.into();
        let target = self.ensure_item(&Target::Handle(handle));

        match self.find_name(&name) {
            Some(prior) if prior != target => {
                if self.items[prior].handle.is_none() {
                    let placeholder = self.items.remove(prior);
                    let target = if prior < target { target - 1 } else { target };
                    let item = &mut self.items[target];
                    item.bindings.extend(placeholder.bindings);
                    item.name = Some(name);
                } else {
                    self.items[prior].name = None;
                    self.items[target].name = Some(name);
                }
            }
            _ => self.items[target].name = Some(name),
        }

        // Newly attached bindings may already be visible.
        self.check_pass(Some(&Target::Handle(handle)), false, &mut ());
    }

    /// Resolves a reference name to its element key, if one is attached.
    #[must_use]
    pub fn reference(&self, name: &str) -> Option<K> {
        self.find_name(name).and_then(|index| self.items[index].handle)
    }

    /// Reads `target`'s cached geometry. `None` until the element attaches
    /// and is measured.
    #[must_use]
    pub fn dimensions(&self, target: &Target<K>) -> Option<Dimensions> {
        self.find(target).and_then(|index| self.items[index].dimensions)
    }

    /// Re-reads viewport metrics and re-measures every item, firing refresh
    /// hooks and re-checking views with the scroll dedupe bypassed.
    pub fn recalculate(&mut self) {
        self.refresh_viewport();
        for index in 0..self.items.len() {
            self.recalculate_item(index);
        }
        self.sweep();
    }

    /// [`recalculate`](Self::recalculate) for a single target.
    pub fn recalculate_target(&mut self, target: &Target<K>) {
        self.refresh_viewport();
        if let Some(index) = self.find(target) {
            self.recalculate_item(index);
            self.sweep();
        }
    }

    /// Evaluates every item's bindings against the current scroll offset.
    ///
    /// With `use_cache` set (the scroll-event path), the pass short-circuits
    /// when the offset has not moved since the last check. A negative offset
    /// on either axis is an overscroll reading: the position and deltas still
    /// update, but the whole cycle is skipped.
    pub fn check_views(&mut self, use_cache: bool) {
        self.check_pass(None, use_cache, &mut ());
    }

    /// [`check_views`](Self::check_views) for a single target.
    pub fn check_views_target(&mut self, target: &Target<K>, use_cache: bool) {
        self.check_pass(Some(target), use_cache, &mut ());
    }

    /// [`check_views`](Self::check_views) reporting every fired and
    /// suppressed binding to `trace`.
    pub fn check_views_with_trace(&mut self, use_cache: bool, trace: &mut impl CheckTrace) {
        self.check_pass(None, use_cache, trace);
    }

    fn find(&self, target: &Target<K>) -> Option<usize> {
        match target {
            Target::Handle(handle) => self.find_handle(handle),
            Target::Name(name) => self.find_name(name),
        }
    }

    fn find_handle(&self, handle: &K) -> Option<usize> {
        self.items.iter().position(|item| item.handle == Some(*handle))
    }

    fn find_name(&self, name: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.name.as_deref() == Some(name))
    }

    /// Finds `target`'s item, creating (and for handles, measuring) it if
    /// absent.
    fn ensure_item(&mut self, target: &Target<K>) -> usize {
        match target {
            Target::Handle(handle) => match self.find_handle(handle) {
                Some(index) => index,
                None => {
                    self.items.push(TrackedItem::for_handle(*handle));
                    let index = self.items.len() - 1;
                    self.measure_item(index);
                    index
                }
            },
            Target::Name(name) => match self.find_name(name) {
                Some(index) => index,
                None => {
                    self.items.push(TrackedItem::for_name(name.clone()));
                    self.items.len() - 1
                }
            },
        }
    }

    fn refresh_viewport(&mut self) {
        self.viewport = Viewport::new(
            self.host.window_height() + self.host.chrome_allowance(),
            self.host.document_height(),
        );
    }

    /// Full recompute of one item's dimensions from the host's current
    /// layout box and the tracked scroll offset.
    fn measure_item(&mut self, index: usize) {
        let Some(handle) = self.items.get(index).and_then(|item| item.handle) else {
            return;
        };
        if let Some(rect) = self.host.bounding_rect(&handle) {
            let measured = Dimensions::from_bounding_rect(rect, self.scroll.offset());
            self.items[index].dimensions = Some(measured);
        }
    }

    fn recalculate_item(&mut self, index: usize) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        let handle = item.handle;
        for binding in item.bindings.iter_mut() {
            if binding.flush {
                binding.last = None;
            }
            if let (Some(handle), Some(hook)) = (handle, binding.on_recalculate.as_mut()) {
                hook(handle);
            }
        }

        // Name-only placeholders have nothing to measure or check.
        if handle.is_none() {
            return;
        }
        self.measure_item(index);
        self.check_item(index, &mut ());
    }

    fn check_pass(
        &mut self,
        target: Option<&Target<K>>,
        use_cache: bool,
        trace: &mut impl CheckTrace,
    ) {
        let position = self.host.scroll_offset();
        if use_cache && position == self.scroll.offset() {
            return;
        }
        self.scroll.advance_to(position);

        // Overscroll bounce reads negative; the deltas above still record
        // where it went, but the cycle itself is skipped.
        if position.x < 0.0 || position.y < 0.0 {
            return;
        }

        match target {
            Some(target) => {
                if let Some(index) = self.find(target) {
                    self.check_item(index, trace);
                }
            }
            None => {
                for index in 0..self.items.len() {
                    self.check_item(index, trace);
                }
            }
        }
        self.sweep();
    }

    fn check_item(&mut self, index: usize, trace: &mut impl CheckTrace) {
        let scroll = self.scroll;
        let viewport = self.viewport;
        let views = &self.views;
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        let Some(handle) = item.handle else {
            return;
        };
        let Some(dimensions) = item.dimensions else {
            return;
        };

        for binding in item.bindings.iter_mut() {
            // Unknown views are a misconfiguration, not an error: the
            // binding simply never fires.
            let Some(view) = views.get(binding.view) else {
                continue;
            };
            if let Some(should_update) = binding.should_update.as_deref() {
                if !should_update(handle) {
                    continue;
                }
            }

            let transit = view(&dimensions, &scroll, &viewport, &binding.config);

            if binding.config.cache && binding.last == Some(transit) {
                trace.suppressed(binding.id, binding.view, transit);
                continue;
            }
            binding.last = Some(transit);
            trace.fired(binding.id, binding.view, transit);
            if (binding.callback)(handle, transit, &dimensions, &scroll) == Outcome::Unbind {
                binding.dead = true;
            }
        }
        item.bindings.retain(|binding| !binding.dead);
    }

    /// Drops items left with nothing to do by callback-driven unbinds.
    fn sweep(&mut self) {
        self.items.retain(|item| !item.is_stranded());
    }
}

impl<K, H> core::fmt::Debug for VisibilityTracker<K, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VisibilityTracker")
            .field("items", &self.items.len())
            .field("scroll", &self.scroll)
            .field("viewport", &self.viewport)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}
