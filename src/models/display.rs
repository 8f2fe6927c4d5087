//! Display records handed to the theme/display persistence API.

use crate::models::{ItemId, Menu, MenuItem, Orientation, ThemeConfig};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Display type used for boards created by the designer.
pub const DIGITAL_SIGNAGE: &str = "Digital Signage";

/// A published board: theme, selected items and uploaded filler images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    /// Assigned by the persistence API once stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    /// Operator-facing name (e.g., "Main Entrance")
    pub name: String,
    /// Display kind
    #[serde(rename = "type")]
    pub display_type: String,
    /// Canvas orientation
    pub orientation: Orientation,
    /// Whether the board is live
    pub is_active: bool,
    /// Items slated for the board, in menu order
    pub selected_items: Vec<MenuItem>,
    /// Full theme, including the cached capacity
    pub theme: ThemeConfig,
    /// Non-empty filler image references
    pub uploaded_images: Vec<String>,
}

impl Display {
    /// Builds the payload for a new signage board from the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank.
    pub fn from_board(name: &str, menu: &Menu, theme: &ThemeConfig) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("Display name cannot be empty");
        }

        Ok(Self {
            id: None,
            name: name.to_string(),
            display_type: DIGITAL_SIGNAGE.to_string(),
            orientation: theme.orientation,
            is_active: true,
            selected_items: menu.selected_items().into_iter().cloned().collect(),
            theme: theme.clone(),
            uploaded_images: theme.filler_images().map(str::to_string).collect(),
        })
    }
}
