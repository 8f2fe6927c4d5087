//! Capacity estimate command.

use crate::cli::common::{load_config, print_json, BoardFiles, CliError, CliResult};
use crate::services::{BoardState, CapacityResult, CapacityStatus, MenuStore};
use clap::Args;
use serde::Serialize;

/// Estimate how many items the board can hold
#[derive(Debug, Clone, Args)]
pub struct CapacityArgs {
    /// Menu and theme files
    #[command(flatten)]
    pub files: BoardFiles,

    /// Store the capacity in the theme file (approxItemsVisible)
    #[arg(long)]
    pub write: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CapacityResponse {
    #[serde(flatten)]
    estimate: CapacityResult,
    selected: usize,
    items_left: i64,
    status: CapacityStatus,
}

impl CapacityArgs {
    /// Execute the capacity command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut board = self.files.load(&config)?;

        let mut state = BoardState::new();
        let estimate = state.estimate(&board.menu, &board.theme);
        let selected = board.menu.visible_selected_count(board.theme.show_unavailable);

        let response = CapacityResponse {
            estimate,
            selected,
            items_left: estimate.items_left(selected),
            status: CapacityStatus::classify(
                estimate.total_capacity,
                selected,
                config.ui.capacity_warning_threshold,
            ),
        };

        if self.write {
            let path = board.theme_path.clone().ok_or_else(|| {
                CliError::validation("--write needs a theme file (pass --theme or configure one)")
            })?;
            state.sync_theme(&board.menu, &mut board.theme);
            MenuStore::save_theme(&board.theme, &path)
                .map_err(|e| CliError::io(format!("{e:#}")))?;
        }

        if self.json {
            return print_json(&response);
        }

        println!("Capacity:       {}", response.estimate.total_capacity);
        println!("Fits now:       {}", response.estimate.items_that_fit);
        println!("Selected:       {}", response.selected);
        println!("Items left:     {}", response.items_left);
        println!("Overflow:       {}", response.estimate.overflow_count);
        println!("Status:         {}", response.status.as_str());
        if self.write {
            println!();
            println!("Theme updated with approxItemsVisible = {}", estimate.total_capacity);
        }

        Ok(())
    }
}
