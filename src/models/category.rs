//! Menu categories: named, ordered groups of items.

use crate::models::menu_item::{MenuItem, VisibilityPolicy};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A named, ordered group of menu items.
///
/// Item order is meaningful: it drives board order and is the target of
/// reorder operations.
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct MenuCategory {
    /// Category heading shown on the board ribbon
    #[serde(rename = "category")]
    pub name: String,
    /// Items in display order
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    /// Creates a category from a name and its items.
    pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Items that pass the visibility policy, in category order.
    pub fn visible_items(&self, policy: VisibilityPolicy) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |item| item.is_visible(policy))
    }

    /// Returns true if at least one item passes the visibility policy.
    pub fn has_visible_items(&self, policy: VisibilityPolicy) -> bool {
        self.items.iter().any(|item| item.is_visible(policy))
    }

    /// Returns true if every item is selected (false for an empty category).
    pub fn all_selected(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.is_selected)
    }

    /// Selects or deselects every item in the category.
    pub fn set_all_selected(&mut self, should_select: bool) {
        for item in &mut self.items {
            item.is_selected = should_select;
        }
    }

    /// Moves the item at `from` so that it ends up at index `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        move_within(&mut self.items, from, to)
            .map_err(|e| anyhow::anyhow!("Cannot reorder items in '{}': {e}", self.name))
    }
}

/// Removes the element at `from` and re-inserts it at `to`.
pub(crate) fn move_within<T>(list: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
    let len = list.len();
    if from >= len || to >= len {
        anyhow::bail!("index out of range (from {from}, to {to}, length {len})");
    }

    let moved = list.remove(from);
    list.insert(to, moved);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starters() -> MenuCategory {
        MenuCategory::new(
            "Starters",
            vec![
                MenuItem::new(1, "Paneer Tikka", 220.0).selected(),
                MenuItem::new(2, "Gobi 65", 160.0),
                MenuItem::new(3, "Veg Spring Roll", 180.0)
                    .selected()
                    .with_availability(false),
            ],
        )
    }

    #[test]
    fn test_visible_items() {
        let category = starters();
        let strict = VisibilityPolicy {
            include_unselected: false,
            show_unavailable: false,
        };
        let names: Vec<_> = category.visible_items(strict).map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Paneer Tikka"]);

        let preview = VisibilityPolicy {
            include_unselected: true,
            show_unavailable: true,
        };
        assert_eq!(category.visible_items(preview).count(), 3);
    }

    #[test]
    fn test_has_visible_items_empty() {
        let category = MenuCategory::new("Empty", Vec::new());
        assert!(!category.has_visible_items(VisibilityPolicy::default()));
        assert!(!category.all_selected());
    }

    #[test]
    fn test_set_all_selected() {
        let mut category = starters();
        category.set_all_selected(true);
        assert!(category.all_selected());
        category.set_all_selected(false);
        assert!(category.items.iter().all(|i| !i.is_selected));
    }

    #[test]
    fn test_move_item() {
        let mut category = starters();
        category.move_item(0, 2).unwrap();
        let ids: Vec<_> = category.items.iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);

        category.move_item(2, 0).unwrap();
        let ids: Vec<_> = category.items.iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_move_item_out_of_range() {
        let mut category = starters();
        assert!(category.move_item(3, 0).is_err());
        assert!(category.move_item(0, 5).is_err());
    }

    #[test]
    fn test_serde_uses_category_key() {
        let json = r#"{"category":"Drinks","items":[]}"#;
        let category: MenuCategory = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, "Drinks");
        assert_eq!(serde_json::to_string(&category).unwrap(), json);
    }
}
