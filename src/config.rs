//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_BINARY_NAME, APP_DATA_DIR, CONFIG_DIR_ENV};

/// Default log filter when neither `RUST_LOG` nor `--verbose` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Default number of free slots at which capacity turns into a warning.
pub const DEFAULT_CAPACITY_WARNING_THRESHOLD: usize = 5;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Menu file used when a command is given no `--menu`
    pub menu_file: Option<PathBuf>,
    /// Theme file used when a command is given no `--theme`
    pub theme_file: Option<PathBuf>,
    /// Where display payloads are written
    pub output_dir: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        // Use config directory for display output by default
        let output_dir = Self::default_output_dir().unwrap_or_else(|_| PathBuf::from("displays"));

        Self {
            menu_file: None,
            theme_file: None,
            output_dir,
        }
    }
}

impl PathConfig {
    /// Gets the default output directory path.
    ///
    /// - Linux: `~/.config/MenuBoard/displays/`
    /// - macOS: `~/Library/Application Support/MenuBoard/displays/`
    /// - Windows: `%APPDATA%\MenuBoard\displays\`
    fn default_output_dir() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("displays"))
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Free slots at or below which capacity is reported as a warning
    pub capacity_warning_threshold: usize,
    /// Log filter used when `RUST_LOG` is not set (e.g. "warn", "menuboard=debug")
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            capacity_warning_threshold: DEFAULT_CAPACITY_WARNING_THRESHOLD,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/MenuBoard/config.toml`
/// - macOS: `~/Library/Application Support/MenuBoard/config.toml`
/// - Windows: `%APPDATA%\MenuBoard\config.toml`
///
/// Setting `MENUBOARD_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - configured `menu_file` / `theme_file` must exist
/// - `log_level` must not be empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// UI preferences
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let configured_files = [
            ("Menu file", &self.paths.menu_file),
            ("Theme file", &self.paths.theme_file),
        ];
        for (label, path) in configured_files {
            if let Some(path) = path {
                if !path.exists() {
                    anyhow::bail!("{label} does not exist: {}", path.display());
                }
            }
        }

        if self.ui.log_level.trim().is_empty() {
            anyhow::bail!("Log level cannot be empty");
        }

        Ok(())
    }

    /// Resolves the menu file: explicit argument first, then the configured default.
    pub fn resolve_menu_file(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.paths.menu_file.clone())
            .with_context(|| {
                format!("No menu file given. Pass --menu or run `{APP_BINARY_NAME} config set --menu-file <FILE>`")
            })
    }

    /// Resolves the theme file, if any: explicit argument first, then the configured default.
    pub fn resolve_theme_file(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.paths.theme_file.clone())
    }
}
