//! Canvas geometry shared by the layout engine and the capacity estimator.
//!
//! Both consumers must agree on every number here, so all pixel formulas
//! live in one place. Values are derived from the theme and computed
//! without validation: out-of-range scales produce degenerate but finite
//! geometry rather than errors.

use crate::models::{Orientation, ThemeConfig};
use serde::Serialize;

/// Landscape canvas width in pixels.
pub const LANDSCAPE_WIDTH: f64 = 1280.0;
/// Landscape canvas height in pixels.
pub const LANDSCAPE_HEIGHT: f64 = 720.0;

/// Fraction of the canvas height reserved for the logo header.
pub const HEADER_FRACTION: f64 = 0.1;
/// Height reserved for the footer band.
pub const FOOTER_HEIGHT: f64 = 80.0;
/// Vertical padding around the column grid.
pub const PADDING_Y: f64 = 40.0;
/// Extra bottom margin below the grid.
pub const MARGIN_Y: f64 = 20.0;
/// Horizontal padding (both sides combined).
pub const PADDING_X: f64 = 80.0;
/// Gap between adjacent columns.
pub const COLUMN_GAP: f64 = 30.0;

/// Font size at scale 3.
pub const REFERENCE_FONT_SIZE: f64 = 12.0;
/// Scale at which fonts render at their reference size.
pub const REFERENCE_SCALE: f64 = 3.0;
/// Average glyph width as a fraction of the font size.
pub const CHAR_WIDTH_FACTOR: f64 = 0.55;
/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.33;
/// Wrapping never assumes fewer characters per line than this.
pub const MIN_CHARS_PER_LINE: usize = 10;
/// Vertical padding added to every item row.
pub const ITEM_PADDING: f64 = 3.0;
/// Category ribbon font size at scale 3.
pub const HEADER_FONT_SIZE: f64 = 13.0;
/// Category ribbon padding + margin.
pub const HEADER_CHROME: f64 = 8.0 + 12.0;
/// Line count the capacity estimator assumes for an unknown item.
pub const AVERAGE_ITEM_LINES: f64 = 1.5;

/// Resolved pixel geometry of one board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasGeometry {
    /// Number of columns
    pub columns: usize,
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Height reserved for the logo header band
    pub header_height: f64,
    /// Height reserved for the footer band
    pub footer_height: f64,
    /// Vertical space available to each column
    pub grid_height: f64,
    /// Horizontal space available to each column
    pub column_width: f64,
    /// Item font size
    pub base_font_size: f64,
    /// Estimated characters that fit on one item line
    pub chars_per_line: usize,
    /// Height of one item text line
    pub line_height: f64,
    /// Height of one category header node
    pub header_node_height: f64,
}

impl CanvasGeometry {
    /// Computes geometry for a theme.
    ///
    /// When `hide_header` is set the logo band is dropped and the board is
    /// always split into three columns, whatever the orientation.
    pub fn new(theme: &ThemeConfig, hide_header: bool) -> Self {
        let (width, height) = match theme.orientation {
            Orientation::Landscape => (LANDSCAPE_WIDTH, LANDSCAPE_HEIGHT),
            Orientation::Portrait => (LANDSCAPE_HEIGHT, LANDSCAPE_WIDTH),
        };

        let columns = if hide_header {
            3
        } else {
            match theme.orientation {
                Orientation::Landscape => 3,
                Orientation::Portrait => 2,
            }
        };

        let header_height = if theme.show_logo && !hide_header {
            height * HEADER_FRACTION
        } else {
            0.0
        };
        let footer_height = FOOTER_HEIGHT;
        let grid_height = height - header_height - footer_height - PADDING_Y - MARGIN_Y;

        let gaps = COLUMN_GAP * (columns - 1) as f64;
        let column_width = (width - PADDING_X - gaps) / columns as f64;

        let scale = theme.font_size_scale / REFERENCE_SCALE;
        let base_font_size = REFERENCE_FONT_SIZE * scale;
        // Float-to-int casts saturate, so degenerate scales cannot panic here
        let chars_per_line = (column_width / (base_font_size * CHAR_WIDTH_FACTOR)).floor() as usize;

        Self {
            columns,
            width,
            height,
            header_height,
            footer_height,
            grid_height,
            column_width,
            base_font_size,
            chars_per_line,
            line_height: base_font_size * LINE_HEIGHT_FACTOR,
            header_node_height: HEADER_FONT_SIZE * scale + HEADER_CHROME,
        }
    }

    /// Number of wrapped lines an item label occupies.
    ///
    /// Length is measured in UTF-16 code units, as the board renderer
    /// counts it, so an emoji outside the BMP takes two slots.
    pub fn line_count(&self, label: &str) -> usize {
        label
            .encode_utf16()
            .count()
            .div_ceil(self.chars_per_line.max(MIN_CHARS_PER_LINE))
    }

    /// Height of an item row for the given label.
    pub fn item_height(&self, label: &str) -> f64 {
        self.line_count(label) as f64 * self.line_height + ITEM_PADDING
    }

    /// Height the capacity estimator assumes for an item it has not seen.
    pub fn average_item_height(&self) -> f64 {
        AVERAGE_ITEM_LINES * self.line_height + ITEM_PADDING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_landscape_reference_geometry() {
        let geometry = CanvasGeometry::new(&ThemeConfig::default(), false);
        assert_eq!(geometry.columns, 3);
        assert!(approx(geometry.header_height, 72.0));
        assert!(approx(geometry.grid_height, 508.0));
        assert!(approx(geometry.column_width, 380.0));
        assert!(approx(geometry.base_font_size, 12.0));
        assert_eq!(geometry.chars_per_line, 57);
        assert!(approx(geometry.line_height, 15.96));
        assert!(approx(geometry.header_node_height, 33.0));
    }

    #[test]
    fn test_portrait_geometry() {
        let theme = ThemeConfig {
            orientation: Orientation::Portrait,
            ..ThemeConfig::default()
        };
        let geometry = CanvasGeometry::new(&theme, false);
        assert_eq!(geometry.columns, 2);
        assert!(approx(geometry.width, 720.0));
        assert!(approx(geometry.grid_height, 1012.0));
        assert!(approx(geometry.column_width, 305.0));
    }

    #[test]
    fn test_hidden_header_forces_three_columns() {
        let theme = ThemeConfig {
            orientation: Orientation::Portrait,
            ..ThemeConfig::default()
        };
        let geometry = CanvasGeometry::new(&theme, true);
        assert_eq!(geometry.columns, 3);
        assert!(approx(geometry.header_height, 0.0));
        assert!(approx(geometry.grid_height, 1280.0 - 80.0 - 60.0));
    }

    #[test]
    fn test_logo_hidden_reclaims_header_band() {
        let theme = ThemeConfig {
            show_logo: false,
            ..ThemeConfig::default()
        };
        let geometry = CanvasGeometry::new(&theme, false);
        assert!(approx(geometry.grid_height, 580.0));
    }

    #[test]
    fn test_item_height_wraps() {
        let geometry = CanvasGeometry::new(&ThemeConfig::default(), false);
        assert_eq!(geometry.line_count("Paneer Tikka"), 1);
        assert_eq!(geometry.line_count(&"x".repeat(57)), 1);
        assert_eq!(geometry.line_count(&"x".repeat(58)), 2);
        assert_eq!(geometry.line_count(""), 0);
        assert!(approx(geometry.item_height("Paneer Tikka"), 18.96));
    }

    #[test]
    fn test_line_count_uses_utf16_length() {
        let geometry = CanvasGeometry::new(&ThemeConfig::default(), false);
        // 56 ASCII chars plus one astral emoji is 58 UTF-16 units
        let label = format!("{}\u{1F336}", "x".repeat(56));
        assert_eq!(label.chars().count(), 57);
        assert_eq!(geometry.line_count(&label), 2);
        // BMP characters count once
        assert_eq!(geometry.line_count(&"é".repeat(57)), 1);
    }

    #[test]
    fn test_min_chars_per_line_floor() {
        let theme = ThemeConfig {
            font_size_scale: 10.0,
            orientation: Orientation::Portrait,
            ..ThemeConfig::default()
        };
        let geometry = CanvasGeometry::new(&theme, false);
        assert_eq!(geometry.chars_per_line, 13);

        let huge = ThemeConfig {
            font_size_scale: 40.0,
            ..ThemeConfig::default()
        };
        let geometry = CanvasGeometry::new(&huge, false);
        assert!(geometry.chars_per_line < MIN_CHARS_PER_LINE);
        assert_eq!(geometry.line_count(&"x".repeat(20)), 2);
    }

    #[test]
    fn test_degenerate_scale_does_not_panic() {
        let theme = ThemeConfig {
            font_size_scale: 0.0,
            ..ThemeConfig::default()
        };
        let geometry = CanvasGeometry::new(&theme, false);
        assert_eq!(geometry.chars_per_line, usize::MAX);
        assert_eq!(geometry.line_count("Tea"), 1);
        assert!(approx(geometry.average_item_height(), ITEM_PADDING));
    }
}
