//! Menu, theme and display file I/O.
//!
//! All board files are JSON in the shapes the menu provider and the
//! persistence API exchange. Writes go through a temp file + rename so a
//! crashed save never leaves a half-written file behind.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::{Display, Menu, ThemeConfig};

/// Service for loading and saving board files.
pub struct MenuStore;

impl MenuStore {
    /// Loads a menu (`{"menu": [...]}`) from a JSON file.
    pub fn load_menu(path: &Path) -> Result<Menu> {
        read_json(path).with_context(|| format!("Failed to load menu from {}", path.display()))
    }

    /// Saves a menu atomically.
    pub fn save_menu(menu: &Menu, path: &Path) -> Result<()> {
        write_json_atomic(menu, path)
            .with_context(|| format!("Failed to save menu to {}", path.display()))?;
        info!(path = %path.display(), categories = menu.categories.len(), "menu saved");
        Ok(())
    }

    /// Loads a theme from a JSON file. Missing keys take their defaults.
    pub fn load_theme(path: &Path) -> Result<ThemeConfig> {
        read_json(path).with_context(|| format!("Failed to load theme from {}", path.display()))
    }

    /// Loads a theme, or the default theme when no path is given.
    pub fn load_theme_or_default(path: Option<&Path>) -> Result<ThemeConfig> {
        path.map_or_else(|| Ok(ThemeConfig::default()), Self::load_theme)
    }

    /// Saves a theme atomically.
    pub fn save_theme(theme: &ThemeConfig, path: &Path) -> Result<()> {
        write_json_atomic(theme, path)
            .with_context(|| format!("Failed to save theme to {}", path.display()))?;
        info!(path = %path.display(), "theme saved");
        Ok(())
    }

    /// Writes a display payload into `dir`, named after the display.
    ///
    /// Returns the path written.
    pub fn save_display(payload: &Display, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

        let path = dir.join(format!("{}.json", sanitize_filename(&payload.name)));
        write_json_atomic(payload, &path)
            .with_context(|| format!("Failed to save display to {}", path.display()))?;
        info!(path = %path.display(), name = %payload.name, "display saved");
        Ok(path)
    }
}

/// Sanitizes a display name for use as a filename.
///
/// Replaces problematic characters with underscores and converts to lowercase.
///
/// ```
/// # use menuboard::services::store::sanitize_filename;
/// assert_eq!(sanitize_filename("Lobby Screen"), "lobby_screen");
/// assert_eq!(sanitize_filename("Counter/Left:2"), "counter_left_2");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    name.trim().replace(['/', '\\', ':', ' '], "_").to_lowercase()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;
    Ok(())
}
