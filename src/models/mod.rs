//! Data models for menus, themes and published displays.
//!
//! This module contains the core data structures used throughout the crate.
//! Models are independent of layout logic and of any I/O.

pub mod category;
pub mod display;
pub mod menu;
pub mod menu_item;
pub mod theme;

// Re-export all model types
pub use category::MenuCategory;
pub use display::Display;
pub use menu::Menu;
pub use menu_item::{FoodType, ItemId, ItemUpdate, MenuItem, VisibilityPolicy};
pub use theme::{BackgroundType, Orientation, ThemeConfig, ThemeGeometryKey, MAX_MENU_IMAGES};
