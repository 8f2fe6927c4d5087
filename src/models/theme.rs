//! Board theme configuration.
//!
//! The theme is a flat record of toggles, numeric controls, colors and
//! fonts. Only a handful of fields influence layout geometry; those are
//! captured by [`ThemeGeometryKey`] so capacity can be memoized on them.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum number of filler image slots a theme can carry.
pub const MAX_MENU_IMAGES: usize = 3;

/// Valid range for `font_size_scale`.
pub const FONT_SCALE_RANGE: std::ops::RangeInclusive<f64> = 1.0..=10.0;

/// Board orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// 1280x720 canvas
    #[default]
    Landscape,
    /// 720x1280 canvas
    Portrait,
}

impl Orientation {
    /// Parses "landscape" / "portrait" (case-insensitive).
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "landscape" => Ok(Self::Landscape),
            "portrait" => Ok(Self::Portrait),
            _ => anyhow::bail!("Invalid orientation '{raw}'. Must be 'landscape' or 'portrait'"),
        }
    }
}

/// Board background source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    /// Solid `background_color`
    #[default]
    Color,
    /// `background_image` reference
    Image,
}

/// Theme configuration controlling rendering and layout.
///
/// Defaults match a freshly created board. `approx_items_visible` is a
/// cached value owned by [`BoardState`](crate::services::board::BoardState);
/// anything else writing it should expect to be overwritten on the next sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// Show the logo header band
    pub show_logo: bool,
    /// Logo image reference
    pub logo: String,
    /// Logo width in pixels
    pub logo_width: u32,
    /// Styling preset for sold-out items
    pub unavailable_theme: String,
    /// Category ribbon font
    pub category_font: String,
    /// Item row font
    pub item_font: String,
    /// Ribbon color for even categories
    pub primary: String,
    /// Ribbon color for odd categories
    pub secondary: String,
    /// Background source
    pub background_type: BackgroundType,
    /// Background image reference
    pub background_image: String,
    /// Background color
    pub background_color: String,
    /// Category text color
    pub category_font_color: String,
    /// Item text color
    pub item_font_color: String,
    /// Price text color
    pub price_font_color: String,
    /// Canvas orientation
    pub orientation: Orientation,
    /// Company name shown next to the logo
    pub company_name: String,
    /// Text scale, 1-10 (3 is the reference size)
    pub font_size_scale: f64,
    /// Allow the board to scroll instead of clipping
    pub allow_scrolling: bool,
    /// Show the footer band
    pub show_footer: bool,
    /// Keep unavailable items on the board as "Sold Out"
    pub show_unavailable: bool,
    /// Background opacity, 0-100
    pub bg_opacity: u8,
    /// Cached capacity of the current theme + menu
    pub approx_items_visible: usize,
    /// Filler image slots (empty string = unused slot)
    pub menu_images: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            show_logo: true,
            logo: String::new(),
            logo_width: 150,
            unavailable_theme: "Default".to_string(),
            category_font: "Protest Riot".to_string(),
            item_font: "Outfit".to_string(),
            primary: "#FFCC00".to_string(),
            secondary: "#B00000".to_string(),
            background_type: BackgroundType::Color,
            background_image: String::new(),
            background_color: "#B00000".to_string(),
            category_font_color: "#000000".to_string(),
            item_font_color: "#FFFFFF".to_string(),
            price_font_color: "#FFFFFF".to_string(),
            orientation: Orientation::Landscape,
            company_name: String::new(),
            font_size_scale: 3.0,
            allow_scrolling: true,
            show_footer: true,
            show_unavailable: true,
            bg_opacity: 100,
            approx_items_visible: 45,
            menu_images: vec![String::new(); MAX_MENU_IMAGES],
        }
    }
}

/// The theme fields that affect capacity.
///
/// `font_size_scale` is stored as raw bits so the key can be hashed and
/// compared exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeGeometryKey {
    font_size_scale_bits: u64,
    /// Canvas orientation
    pub orientation: Orientation,
    /// Logo header shown
    pub show_logo: bool,
    /// Footer shown
    pub show_footer: bool,
    /// Unavailable items shown
    pub show_unavailable: bool,
}

impl ThemeGeometryKey {
    /// Font scale the key was taken from.
    pub fn font_size_scale(&self) -> f64 {
        f64::from_bits(self.font_size_scale_bits)
    }
}

impl ThemeConfig {
    /// Filler images that are actually uploaded, in slot order.
    pub fn filler_images(&self) -> impl Iterator<Item = &str> {
        self.menu_images
            .iter()
            .map(String::as_str)
            .filter(|image| !image.is_empty())
    }

    /// Snapshot of the geometry-affecting fields.
    pub fn geometry_key(&self) -> ThemeGeometryKey {
        ThemeGeometryKey {
            font_size_scale_bits: self.font_size_scale.to_bits(),
            orientation: self.orientation,
            show_logo: self.show_logo,
            show_footer: self.show_footer,
            show_unavailable: self.show_unavailable,
        }
    }

    /// Checks that the configuration is within the ranges the editor offers.
    ///
    /// The layout engine never calls this; it computes with whatever values
    /// it is handed. Callers that accept user input should validate first.
    pub fn validate(&self) -> Result<()> {
        if !FONT_SCALE_RANGE.contains(&self.font_size_scale) {
            anyhow::bail!(
                "Font size scale must be between {} and {} (got {})",
                FONT_SCALE_RANGE.start(),
                FONT_SCALE_RANGE.end(),
                self.font_size_scale
            );
        }

        if self.bg_opacity > 100 {
            anyhow::bail!(
                "Background opacity must be between 0 and 100 (got {})",
                self.bg_opacity
            );
        }

        if self.logo_width == 0 {
            anyhow::bail!("Logo width must be greater than zero");
        }

        if self.menu_images.len() > MAX_MENU_IMAGES {
            anyhow::bail!(
                "At most {} menu images are supported (got {})",
                MAX_MENU_IMAGES,
                self.menu_images.len()
            );
        }

        // Match #RRGGBB or #RGB format
        let hex_regex = Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$")
            .context("Failed to create hex regex")?;
        let colors = [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("backgroundColor", &self.background_color),
            ("categoryFontColor", &self.category_font_color),
            ("itemFontColor", &self.item_font_color),
            ("priceFontColor", &self.price_font_color),
        ];
        for (field, value) in colors {
            if !hex_regex.is_match(value) {
                anyhow::bail!(
                    "Invalid {field} color '{value}'. Expected #RRGGBB or #RGB"
                );
            }
        }

        Ok(())
    }
}
