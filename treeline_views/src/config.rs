// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-binding view configuration and override merging.

/// Knobs every view function respects.
///
/// A tracker carries one `ViewConfig` as its defaults; each binding may carry
/// a [`ConfigOverrides`] whose set fields win over those defaults. All four
/// knobs default to `true`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    /// Shorten the range so elements starting above the fold begin at
    /// progress 0 instead of partway through.
    pub fold_offset: bool,
    /// Rescale progress so it reaches 1 exactly when the document cannot
    /// scroll any further past the element.
    pub bottom_offset: bool,
    /// Suppress the callback when the computed value is unchanged since the
    /// previous check.
    pub cache: bool,
    /// Clamp progress to `[0, 1]`.
    pub cap: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fold_offset: true,
            bottom_offset: true,
            cache: true,
            cap: true,
        }
    }
}

impl ViewConfig {
    /// Returns this configuration with `overrides`' set fields applied.
    #[must_use]
    pub fn with_overrides(self, overrides: &ConfigOverrides) -> Self {
        Self {
            fold_offset: overrides.fold_offset.unwrap_or(self.fold_offset),
            bottom_offset: overrides.bottom_offset.unwrap_or(self.bottom_offset),
            cache: overrides.cache.unwrap_or(self.cache),
            cap: overrides.cap.unwrap_or(self.cap),
        }
    }
}

/// Partial [`ViewConfig`]: only the set fields override a tracker's defaults.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Override for [`ViewConfig::fold_offset`].
    pub fold_offset: Option<bool>,
    /// Override for [`ViewConfig::bottom_offset`].
    pub bottom_offset: Option<bool>,
    /// Override for [`ViewConfig::cache`].
    pub cache: Option<bool>,
    /// Override for [`ViewConfig::cap`].
    pub cap: Option<bool>,
}

impl ConfigOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fold-offset override.
    #[must_use]
    pub fn fold_offset(mut self, value: bool) -> Self {
        self.fold_offset = Some(value);
        self
    }

    /// Sets the bottom-offset override.
    #[must_use]
    pub fn bottom_offset(mut self, value: bool) -> Self {
        self.bottom_offset = Some(value);
        self
    }

    /// Sets the value-cache override.
    #[must_use]
    pub fn cache(mut self, value: bool) -> Self {
        self.cache = Some(value);
        self
    }

    /// Sets the progress-cap override.
    #[must_use]
    pub fn cap(mut self, value: bool) -> Self {
        self.cap = Some(value);
        self
    }
}
