//! Shared CLI error type, exit codes and board file loading.

use crate::config::Config;
use crate::models::{Menu, ThemeConfig};
use crate::services::MenuStore;
use clap::Args;
use std::fmt;
use std::path::PathBuf;
use tracing::warn;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unknown id, out-of-range index, invalid value
    ValidationError = 1,
    /// File could not be read, parsed or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to the OS.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug)]
pub struct CliError {
    /// Exit code for the process
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Error caused by invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Error caused by file I/O or (de)serialization.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for the process.
    pub fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Loads the application configuration.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Menu and theme file arguments shared by board commands.
///
/// Either path falls back to the configured default; a missing theme
/// falls back to the default theme.
#[derive(Debug, Clone, Args)]
pub struct BoardFiles {
    /// Menu JSON file ({"menu": [...]})
    #[arg(short, long, value_name = "FILE")]
    pub menu: Option<PathBuf>,

    /// Theme JSON file
    #[arg(short, long, value_name = "FILE")]
    pub theme: Option<PathBuf>,
}

/// A menu and theme loaded from disk.
#[derive(Debug)]
pub struct LoadedBoard {
    /// The menu snapshot
    pub menu: Menu,
    /// The theme (default when no file was given)
    pub theme: ThemeConfig,
    /// Where the theme came from, if it came from a file
    pub theme_path: Option<PathBuf>,
    /// Where the menu came from
    pub menu_path: PathBuf,
}

impl BoardFiles {
    /// Resolves and loads both files.
    pub fn load(&self, config: &Config) -> CliResult<LoadedBoard> {
        let menu_path = config
            .resolve_menu_file(self.menu.as_deref())
            .map_err(|e| CliError::validation(e.to_string()))?;
        let menu = MenuStore::load_menu(&menu_path).map_err(|e| CliError::io(format!("{e:#}")))?;

        let theme_path = config.resolve_theme_file(self.theme.as_deref());
        let theme = MenuStore::load_theme_or_default(theme_path.as_deref())
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        // The engine computes with any values; flag them but carry on
        if let Err(e) = theme.validate() {
            warn!("theme has out-of-range values: {e}");
        }

        Ok(LoadedBoard {
            menu,
            theme,
            theme_path,
            menu_path,
        })
    }
}
