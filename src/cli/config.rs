//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Default menu file for board commands
    #[arg(long, value_name = "FILE")]
    menu_file: Option<PathBuf>,

    /// Default theme file for board commands
    #[arg(long, value_name = "FILE")]
    theme_file: Option<PathBuf>,

    /// Directory display payloads are written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Free slots at or below which capacity is a warning
    #[arg(long, value_name = "N")]
    warning_threshold: Option<usize>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    menu_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme_file: Option<String>,
    output_dir: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    capacity_warning_threshold: usize,
    log_level: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&to_output(&config))?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.menu_file.is_none()
            && self.theme_file.is_none()
            && self.output_dir.is_none()
            && self.warning_threshold.is_none()
            && self.log_level.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --menu-file, --theme-file, --output-dir, --warning-threshold, or --log-level",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_else(|_| Config::default());

        for (label, path) in [("Menu file", &self.menu_file), ("Theme file", &self.theme_file)] {
            if let Some(path) = path {
                if !path.is_file() {
                    return Err(CliError::validation(format!(
                        "{label} does not exist: {}",
                        path.display()
                    )));
                }
            }
        }
        if let Some(path) = &self.menu_file {
            config.paths.menu_file = Some(path.clone());
        }
        if let Some(path) = &self.theme_file {
            config.paths.theme_file = Some(path.clone());
        }

        // Apply output_dir if provided (create if doesn't exist)
        if let Some(path) = &self.output_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    path.display()
                ))
            })?;

            config.paths.output_dir.clone_from(path);
        }

        if let Some(threshold) = self.warning_threshold {
            config.ui.capacity_warning_threshold = threshold;
        }

        if let Some(level) = &self.log_level {
            if level.trim().is_empty() {
                return Err(CliError::validation("Log level cannot be empty"));
            }
            config.ui.log_level = level.trim().to_string();
        }

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn to_output(config: &Config) -> ConfigOutput {
    let display = |path: &PathBuf| path.to_string_lossy().to_string();

    ConfigOutput {
        config_file: Config::config_file_path()
            .map(|p| display(&p))
            .unwrap_or_default(),
        paths: PathsOutput {
            menu_file: config.paths.menu_file.as_ref().map(display),
            theme_file: config.paths.theme_file.as_ref().map(display),
            output_dir: display(&config.paths.output_dir),
        },
        ui: UiOutput {
            capacity_warning_threshold: config.ui.capacity_warning_threshold,
            log_level: config.ui.log_level.clone(),
        },
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("MenuBoard Configuration");
    println!("=======================");
    println!();

    println!("Paths:");
    match &config.paths.menu_file {
        Some(path) => println!("  Menu File: {}", path.display()),
        None => println!("  Menu File: (not configured)"),
    }
    match &config.paths.theme_file {
        Some(path) => println!("  Theme File: {}", path.display()),
        None => println!("  Theme File: (default theme)"),
    }
    println!("  Output Directory: {}", config.paths.output_dir.display());
    println!();

    println!("UI:");
    println!(
        "  Capacity Warning Threshold: {}",
        config.ui.capacity_warning_threshold
    );
    println!("  Log Level: {}", config.ui.log_level);
    println!();
}
