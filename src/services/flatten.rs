//! Menu flattening: categories in, ordered display nodes out.

use crate::models::{MenuCategory, MenuItem, VisibilityPolicy};
use serde::Serialize;

/// One unit of vertical board content.
///
/// Nodes borrow from the menu and theme snapshot of a single layout pass and
/// are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DisplayNode<'a> {
    /// Category ribbon
    Header {
        /// Category name
        text: &'a str,
        /// Primary ribbon color (even category positions) vs. secondary
        #[serde(rename = "isPrimary")]
        is_primary: bool,
    },
    /// Menu item row
    Item {
        /// The item being shown
        data: &'a MenuItem,
    },
    /// Filler image sized to close a column's remaining gap
    Image {
        /// Image reference as stored in the theme
        source: &'a str,
        /// Assigned pixel height
        height: f64,
    },
}

impl DisplayNode<'_> {
    /// Returns true for category headers.
    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }

    /// Returns true for item rows.
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item { .. })
    }
}

/// Flattens categories into header and item nodes.
///
/// For every category with at least one visible item a header is emitted,
/// followed by its visible items in category order. Header color alternates
/// on the category's position in the full list, so hidden categories still
/// take their turn in the primary/secondary rotation.
pub fn flatten_menu(categories: &[MenuCategory], policy: VisibilityPolicy) -> Vec<DisplayNode<'_>> {
    let mut nodes = Vec::new();

    for (index, category) in categories.iter().enumerate() {
        let mut items = category.visible_items(policy).peekable();
        if items.peek().is_none() {
            continue;
        }

        nodes.push(DisplayNode::Header {
            text: &category.name,
            is_primary: index % 2 == 0,
        });
        nodes.extend(items.map(|data| DisplayNode::Item { data }));
    }

    nodes
}
