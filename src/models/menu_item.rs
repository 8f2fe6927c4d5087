//! Menu item data structures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a menu item as supplied by the menu data provider.
///
/// The provider hands out either numeric or string ids, so both are accepted
/// and serialized back in their original shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric id (e.g., `101`)
    Number(u64),
    /// String id (e.g., `"sku-101"`)
    Text(String),
}

impl ItemId {
    /// Parses an id from command-line text, preferring the numeric form.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<u64>()
            .map_or_else(|_| Self::Text(raw.trim().to_string()), Self::Number)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Dietary tag shown as a dot next to the item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FoodType {
    /// Vegetarian
    #[default]
    #[serde(rename = "VEG")]
    Veg,
    /// Non-vegetarian
    #[serde(rename = "NON_VEG")]
    NonVeg,
}

/// A single menu item owned by a [`MenuCategory`](crate::models::MenuCategory).
///
/// Items are never deleted from a menu. They are hidden by clearing
/// `is_selected` or `is_available` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Provider-assigned identity
    pub id: ItemId,
    /// Canonical item name
    pub name: String,
    /// Base price
    pub price: f64,
    /// Veg / non-veg tag
    #[serde(default)]
    pub food_type: FoodType,
    /// Spicy marker
    #[serde(default)]
    pub is_hot: bool,
    /// Whether the kitchen can currently serve the item
    pub is_available: bool,
    /// Whether the item is slated for display on the board
    #[serde(default)]
    pub is_selected: bool,
    /// Board-only name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Board-only price override (free text, e.g. "120 / 200")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_price: Option<String>,
    /// Category name echoed by some provider endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Partial edit of an item's board-facing fields.
///
/// `None` leaves the corresponding field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    /// New display name (empty string clears the override)
    pub display_name: Option<String>,
    /// New display price (empty string clears the override)
    pub display_price: Option<String>,
    /// New availability flag
    pub is_available: Option<bool>,
}

/// Visibility rules applied when turning a menu into board content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityPolicy {
    /// Preview mode: show every item regardless of selection
    pub include_unselected: bool,
    /// Keep unavailable items (rendered as "Sold Out")
    pub show_unavailable: bool,
}

impl MenuItem {
    /// Creates an available, unselected item with no overrides.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            food_type: FoodType::Veg,
            is_hot: false,
            is_available: true,
            is_selected: false,
            display_name: None,
            display_price: None,
            category: None,
        }
    }

    /// Marks the item as selected.
    #[must_use]
    pub fn selected(mut self) -> Self {
        self.is_selected = true;
        self
    }

    /// Sets the availability flag.
    #[must_use]
    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Sets the food type tag.
    #[must_use]
    pub fn with_food_type(mut self, food_type: FoodType) -> Self {
        self.food_type = food_type;
        self
    }

    /// Name as it appears on the board.
    ///
    /// Returns the display-name override when it is non-empty, otherwise the
    /// canonical name, or `None` when neither resolves to any text.
    pub fn label(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| Some(self.name.as_str()).filter(|name| !name.is_empty()))
    }

    /// Price text as it appears on the board.
    pub fn price_label(&self) -> String {
        if !self.is_available {
            return "Sold Out".to_string();
        }

        match self.display_price.as_deref().filter(|p| !p.is_empty()) {
            Some(price) => price.to_string(),
            None => format_price(self.price),
        }
    }

    /// Returns true if the item passes the given visibility policy.
    pub fn is_visible(&self, policy: VisibilityPolicy) -> bool {
        (policy.include_unselected || self.is_selected)
            && (policy.show_unavailable || self.is_available)
    }

    /// Applies a partial edit to the board-facing fields.
    pub fn apply(&mut self, update: &ItemUpdate) {
        if let Some(name) = &update.display_name {
            self.display_name = Some(name.clone()).filter(|n| !n.is_empty());
        }
        if let Some(price) = &update.display_price {
            self.display_price = Some(price.clone()).filter(|p| !p.is_empty());
        }
        if let Some(available) = update.is_available {
            self.is_available = available;
        }
    }
}

// Manual impl: `price` is a float, hashed by bit pattern for fingerprinting.
impl Hash for MenuItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.price.to_bits().hash(state);
        self.food_type.hash(state);
        self.is_hot.hash(state);
        self.is_available.hash(state);
        self.is_selected.hash(state);
        self.display_name.hash(state);
        self.display_price.hash(state);
        self.category.hash(state);
    }
}

/// Formats a price without a trailing `.0` for whole amounts.
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{}", price as i64)
    } else {
        format!("{price:.2}")
    }
}
