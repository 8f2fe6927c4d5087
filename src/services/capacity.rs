//! Capacity estimation.
//!
//! Answers "how many items can this board hold" before the user has
//! finished selecting. The currently selected items are packed with the
//! real packing rule; space left over is extrapolated using an average
//! item height.

use crate::models::{MenuCategory, ThemeConfig, VisibilityPolicy};
use crate::services::flatten::flatten_menu;
use crate::services::geometry::CanvasGeometry;
use crate::services::layout::pack_nodes;
use serde::Serialize;
use tracing::debug;

/// Outcome of a capacity estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityResult {
    /// Items that fit now plus the extrapolated remaining room
    pub total_capacity: usize,
    /// Selected items that the packer actually placed
    pub items_that_fit: usize,
    /// Selected items that did not fit
    pub overflow_count: usize,
}

impl CapacityResult {
    /// Slots left before the board overflows (negative once it has).
    pub fn items_left(&self, selected: usize) -> i64 {
        self.total_capacity as i64 - selected as i64
    }
}

/// How close a selection is to the board's capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityStatus {
    /// Comfortable headroom
    Safe,
    /// At most `threshold` slots left
    Warning,
    /// More items selected than fit
    Danger,
}

impl CapacityStatus {
    /// Classifies a selection against a capacity.
    pub fn classify(capacity: usize, selected: usize, threshold: usize) -> Self {
        if selected > capacity {
            Self::Danger
        } else if capacity - selected <= threshold {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    /// Lowercase name for human-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Estimates how many items the board can show with the current theme.
///
/// Only selected items take part in the fit simulation; unavailable items
/// are included when the theme shows them. Never fails: degenerate themes
/// give a zero extrapolation rather than an error.
pub fn estimate_capacity(categories: &[MenuCategory], theme: &ThemeConfig) -> CapacityResult {
    let geometry = CanvasGeometry::new(theme, false);
    let policy = VisibilityPolicy {
        include_unselected: false,
        show_unavailable: theme.show_unavailable,
    };

    let outcome = pack_nodes(flatten_menu(categories, policy), &geometry, None);
    let items_that_fit = outcome.items_placed;

    let extrapolated = if outcome.exhausted {
        0
    } else {
        let average = geometry.average_item_height();
        let current = slots_for(geometry.grid_height - outcome.cursor_height, average);
        let unused_columns = geometry.columns - 1 - outcome.cursor;
        let per_column = slots_for(
            geometry.grid_height - geometry.header_node_height / 2.0,
            average,
        );
        current + unused_columns * per_column
    };

    let selected: usize = categories
        .iter()
        .flat_map(|category| category.visible_items(policy))
        .count();

    let result = CapacityResult {
        total_capacity: items_that_fit + extrapolated,
        items_that_fit,
        overflow_count: selected.saturating_sub(items_that_fit),
    };

    debug!(
        scale = theme.font_size_scale,
        orientation = ?theme.orientation,
        fit = result.items_that_fit,
        total = result.total_capacity,
        overflow = result.overflow_count,
        "capacity estimated"
    );

    result
}

/// Whole average-height items that fit in `space`.
fn slots_for(space: f64, average: f64) -> usize {
    if average.is_nan() || average <= 0.0 || !space.is_finite() {
        return 0;
    }
    (space.max(0.0) / average).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MenuItem, Orientation};

    fn items(count: usize, label: &str) -> Vec<MenuItem> {
        (0..count)
            .map(|i| MenuItem::new(i as u64 + 1, label, 50.0).selected())
            .collect()
    }

    #[test]
    fn test_empty_menu_capacity() {
        let result = estimate_capacity(&[], &ThemeConfig::default());
        assert_eq!(result.items_that_fit, 0);
        assert_eq!(result.overflow_count, 0);
        // 18 in column 0, 18 in each of the two unused columns
        assert_eq!(result.total_capacity, 54);
    }

    #[test]
    fn test_fit_counts_selected_only() {
        let mut list = items(4, "Paneer Tikka");
        list[3].is_selected = false;
        let categories = vec![MenuCategory::new("Starters", list)];
        let result = estimate_capacity(&categories, &ThemeConfig::default());
        assert_eq!(result.items_that_fit, 3);
        assert_eq!(result.overflow_count, 0);
        assert!(result.total_capacity > 3);
    }

    #[test]
    fn test_hidden_unavailable_items_are_not_counted() {
        let mut list = items(3, "Paneer Tikka");
        list[0].is_available = false;
        let categories = vec![MenuCategory::new("Starters", list)];
        let theme = ThemeConfig {
            show_unavailable: false,
            ..ThemeConfig::default()
        };
        assert_eq!(estimate_capacity(&categories, &theme).items_that_fit, 2);
    }

    #[test]
    fn test_exhausted_columns_add_no_extrapolation() {
        let categories = vec![MenuCategory::new("Mains", items(50, &"x".repeat(40)))];
        let theme = ThemeConfig {
            orientation: Orientation::Portrait,
            font_size_scale: 10.0,
            ..ThemeConfig::default()
        };
        let result = estimate_capacity(&categories, &theme);
        assert_eq!(result.items_that_fit, 8);
        assert_eq!(result.total_capacity, 8);
        assert_eq!(result.overflow_count, 42);
    }

    #[test]
    fn test_degenerate_scale_is_finite() {
        let theme = ThemeConfig {
            font_size_scale: 0.0,
            ..ThemeConfig::default()
        };
        let categories = vec![MenuCategory::new("Drinks", items(2, "Tea"))];
        let result = estimate_capacity(&categories, &theme);
        assert_eq!(result.items_that_fit, 2);
    }

    #[test]
    fn test_slots_for_guards() {
        assert_eq!(slots_for(100.0, 0.0), 0);
        assert_eq!(slots_for(100.0, f64::NAN), 0);
        assert_eq!(slots_for(-5.0, 10.0), 0);
        assert_eq!(slots_for(100.0, 30.0), 3);
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(CapacityStatus::classify(54, 10, 5), CapacityStatus::Safe);
        assert_eq!(CapacityStatus::classify(54, 49, 5), CapacityStatus::Warning);
        assert_eq!(CapacityStatus::classify(54, 54, 5), CapacityStatus::Warning);
        assert_eq!(CapacityStatus::classify(54, 55, 5), CapacityStatus::Danger);
    }

    #[test]
    fn test_items_left_goes_negative() {
        let result = CapacityResult {
            total_capacity: 10,
            items_that_fit: 10,
            overflow_count: 2,
        };
        assert_eq!(result.items_left(12), -2);
    }
}
