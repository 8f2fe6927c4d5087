//! The top-level menu collection and its mutation operations.

use crate::models::category::{move_within, MenuCategory};
use crate::models::menu_item::{ItemId, ItemUpdate, MenuItem};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Ordered list of menu categories as delivered by the menu data provider.
///
/// Serialized as `{"menu": [...]}`, the provider's response shape.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
pub struct Menu {
    /// Categories in display order
    #[serde(rename = "menu")]
    pub categories: Vec<MenuCategory>,
}

impl Menu {
    /// Creates a menu from its categories.
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    /// Content hash of the whole menu.
    ///
    /// Two menus with the same fingerprint are treated as the same snapshot
    /// by the capacity cache.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Looks up an item by id.
    pub fn find_item(&self, id: &ItemId) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| &item.id == id)
    }

    fn find_item_mut(&mut self, id: &ItemId) -> Result<&mut MenuItem> {
        self.categories
            .iter_mut()
            .flat_map(|category| category.items.iter_mut())
            .find(|item| &item.id == id)
            .with_context(|| format!("Menu item '{id}' not found"))
    }

    fn find_category_mut(&mut self, name: &str) -> Result<&mut MenuCategory> {
        self.categories
            .iter_mut()
            .find(|category| category.name == name)
            .with_context(|| format!("Category '{name}' not found"))
    }

    /// All selected items in menu order, regardless of availability.
    pub fn selected_items(&self) -> Vec<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .filter(|item| item.is_selected)
            .collect()
    }

    /// Number of selected items that would be shown on the board.
    pub fn visible_selected_count(&self, show_unavailable: bool) -> usize {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .filter(|item| item.is_selected && (show_unavailable || item.is_available))
            .count()
    }

    /// Flips the availability flag of an item.
    pub fn toggle_availability(&mut self, id: &ItemId) -> Result<bool> {
        let item = self.find_item_mut(id)?;
        item.is_available = !item.is_available;
        Ok(item.is_available)
    }

    /// Flips the selection flag of an item.
    pub fn toggle_selection(&mut self, id: &ItemId) -> Result<bool> {
        let item = self.find_item_mut(id)?;
        item.is_selected = !item.is_selected;
        Ok(item.is_selected)
    }

    /// Sets the selection flag of an item.
    pub fn set_selected(&mut self, id: &ItemId, is_selected: bool) -> Result<()> {
        self.find_item_mut(id)?.is_selected = is_selected;
        Ok(())
    }

    /// Selects or deselects every item of one category.
    pub fn select_all(&mut self, category: &str, should_select: bool) -> Result<()> {
        self.find_category_mut(category)?.set_all_selected(should_select);
        Ok(())
    }

    /// Deselects every item in the menu.
    pub fn clear_selection(&mut self) {
        for category in &mut self.categories {
            category.set_all_selected(false);
        }
    }

    /// Edits the board-facing fields of an item.
    pub fn update_item(&mut self, id: &ItemId, update: &ItemUpdate) -> Result<()> {
        self.find_item_mut(id)?.apply(update);
        Ok(())
    }

    /// Moves an item within its category.
    pub fn reorder_items(&mut self, category: &str, from: usize, to: usize) -> Result<()> {
        self.find_category_mut(category)?.move_item(from, to)
    }

    /// Moves a whole category within the menu.
    pub fn reorder_categories(&mut self, from: usize, to: usize) -> Result<()> {
        move_within(&mut self.categories, from, to).context("Cannot reorder categories")
    }
}
