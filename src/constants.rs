//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "MenuBoard";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "menuboard";

/// Directory name under the platform config dir.
pub const APP_DATA_DIR: &str = "MenuBoard";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "MENUBOARD_CONFIG_DIR";
