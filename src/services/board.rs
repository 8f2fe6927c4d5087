//! Board state: the single owner of `approx_items_visible`.
//!
//! Two producers compete for that value. The capacity estimator runs
//! whenever the menu or a geometry-affecting theme field changes; the live
//! renderer reports how many items it actually placed. A rendered count
//! for the current inputs always wins over an estimate.

use crate::models::{Menu, ThemeConfig, ThemeGeometryKey};
use crate::services::capacity::{estimate_capacity, CapacityResult};
use serde::Serialize;
use tracing::{debug, trace};

/// Inputs a capacity value was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityKey {
    /// `Menu::fingerprint` of the snapshot
    pub menu: u64,
    /// Geometry-affecting theme fields
    pub theme: ThemeGeometryKey,
}

impl CapacityKey {
    /// Key for a menu and theme pair.
    pub fn of(menu: &Menu, theme: &ThemeConfig) -> Self {
        Self {
            menu: menu.fingerprint(),
            theme: theme.geometry_key(),
        }
    }
}

/// Where the current capacity value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacitySource {
    /// Reported by the live renderer
    Rendered,
    /// Computed by the estimator
    Estimated,
}

/// Memoized capacity for the board being edited.
#[derive(Debug, Default)]
pub struct BoardState {
    estimate: Option<(CapacityKey, CapacityResult)>,
    rendered: Option<(CapacityKey, usize)>,
}

impl BoardState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the estimate for the inputs, recomputing only on key change.
    pub fn estimate(&mut self, menu: &Menu, theme: &ThemeConfig) -> CapacityResult {
        let key = CapacityKey::of(menu, theme);
        if let Some((cached_key, result)) = self.estimate {
            if cached_key == key {
                trace!("capacity cache hit");
                return result;
            }
        }

        let result = estimate_capacity(&menu.categories, theme);
        self.estimate = Some((key, result));
        result
    }

    /// Stores the item count the renderer placed for a given key.
    ///
    /// Counts reported for stale keys are kept but only take effect if the
    /// inputs return to that key.
    pub fn record_rendered_count(&mut self, key: CapacityKey, count: usize) {
        debug!(count, "rendered count recorded");
        self.rendered = Some((key, count));
    }

    /// The authoritative capacity for the inputs and where it came from.
    pub fn approx_items_visible(&mut self, menu: &Menu, theme: &ThemeConfig) -> (usize, CapacitySource) {
        let key = CapacityKey::of(menu, theme);
        match self.rendered {
            Some((rendered_key, count)) if rendered_key == key => (count, CapacitySource::Rendered),
            _ => (
                self.estimate(menu, theme).total_capacity,
                CapacitySource::Estimated,
            ),
        }
    }

    /// Writes the authoritative capacity into the theme.
    ///
    /// `approx_items_visible` is not part of the geometry key, so writing it
    /// never invalidates the cache.
    pub fn sync_theme(&mut self, menu: &Menu, theme: &mut ThemeConfig) -> CapacitySource {
        let (value, source) = self.approx_items_visible(menu, theme);
        theme.approx_items_visible = value;
        source
    }
}
