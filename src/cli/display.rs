//! Display payload commands.

use crate::cli::common::{load_config, print_json, BoardFiles, CliError, CliResult};
use crate::models::Display;
use crate::services::{BoardState, MenuStore};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Manage published displays
#[derive(Debug, Clone, Args)]
pub struct DisplayArgs {
    /// Display subcommand
    #[command(subcommand)]
    pub command: DisplayCommand,
}

/// Display subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum DisplayCommand {
    /// Build a display payload from the current menu and theme
    Create(CreateDisplayArgs),
}

/// Build a display payload
#[derive(Debug, Clone, Args)]
pub struct CreateDisplayArgs {
    /// Menu and theme files
    #[command(flatten)]
    pub files: BoardFiles,

    /// Display name (e.g., "Main Entrance")
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Directory to write the payload to (defaults to the configured output dir)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateDisplayResponse {
    name: String,
    path: String,
    selected_items: usize,
    approx_items_visible: usize,
}

impl DisplayArgs {
    /// Execute the display command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            DisplayCommand::Create(args) => args.execute(),
        }
    }
}

impl CreateDisplayArgs {
    /// Execute the create command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut board = self.files.load(&config)?;

        // Publish with a capacity that matches the menu being published
        BoardState::new().sync_theme(&board.menu, &mut board.theme);

        let display = Display::from_board(&self.name, &board.menu, &board.theme)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| config.paths.output_dir.clone());
        let path = MenuStore::save_display(&display, &dir)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        let response = CreateDisplayResponse {
            name: display.name.clone(),
            path: path.display().to_string(),
            selected_items: display.selected_items.len(),
            approx_items_visible: display.theme.approx_items_visible,
        };

        if self.json {
            return print_json(&response);
        }

        println!("Display '{}' written to {}", response.name, response.path);
        println!(
            "{} items selected, capacity {}.",
            response.selected_items, response.approx_items_visible
        );
        Ok(())
    }
}
