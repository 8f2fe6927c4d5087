//! Board layout command.
//!
//! Runs one layout pass and prints the resulting columns.

use crate::cli::common::{load_config, print_json, BoardFiles, CliError, CliResult, LoadedBoard};
use crate::services::{
    layout_board, BoardLayout, BoardState, CapacityKey, DisplayNode, LayoutOptions, MenuStore,
};
use clap::Args;
use serde::Serialize;

/// Lay out the board and print its columns
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Menu and theme files
    #[command(flatten)]
    pub files: BoardFiles,

    /// Show every item, selected or not
    #[arg(long)]
    pub preview: bool,

    /// Drop the logo header and use three columns
    #[arg(long)]
    pub hide_header: bool,

    /// Stop after this many items and back-fill with filler images
    #[arg(long, value_name = "N", conflicts_with = "bounded")]
    pub quota: Option<usize>,

    /// Use the theme's cached capacity as the quota
    #[arg(long)]
    pub bounded: bool,

    /// Store the number of items shown in the theme file (approxItemsVisible)
    #[arg(long, conflicts_with_all = ["preview", "hide_header", "quota", "bounded"])]
    pub write: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutResponse<'a> {
    #[serde(flatten)]
    layout: &'a BoardLayout<'a>,
    visible_items: usize,
    quota: Option<usize>,
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let board = self.files.load(&config)?;
        if self.write && board.theme_path.is_none() {
            return Err(CliError::validation(
                "--write needs a theme file (pass --theme or configure one)",
            ));
        }

        let rendered = self.render(&board)?;

        if self.write {
            write_rendered_count(board, rendered)?;
            if !self.json {
                println!();
                println!("Theme updated with approxItemsVisible = {rendered}");
            }
        }

        Ok(())
    }

    /// Runs the pass, prints it and returns the number of items shown.
    fn render(&self, board: &LoadedBoard) -> CliResult<usize> {
        let quota = if self.bounded {
            Some(board.theme.approx_items_visible)
        } else {
            self.quota
        };
        let options = LayoutOptions {
            preview_mode: self.preview,
            hide_header: self.hide_header,
            item_quota: quota,
        };

        let layout = layout_board(&board.menu.categories, &board.theme, options);
        let rendered = layout.visible_item_count();

        if self.json {
            print_json(&LayoutResponse {
                layout: &layout,
                visible_items: rendered,
                quota,
            })?;
        } else {
            print_human_readable(&layout);
        }

        Ok(rendered)
    }
}

/// Publishes the count this pass rendered as the board's capacity.
fn write_rendered_count(mut board: LoadedBoard, rendered: usize) -> CliResult<()> {
    let Some(path) = board.theme_path.clone() else {
        return Err(CliError::validation("--write needs a theme file"));
    };

    let mut state = BoardState::new();
    state.record_rendered_count(CapacityKey::of(&board.menu, &board.theme), rendered);
    state.sync_theme(&board.menu, &mut board.theme);

    MenuStore::save_theme(&board.theme, &path).map_err(|e| CliError::io(format!("{e:#}")))
}

fn print_human_readable(layout: &BoardLayout<'_>) {
    let grid = layout.geometry.grid_height;

    for (index, column) in layout.columns.iter().enumerate() {
        println!(
            "Column {} ({:.1} / {:.1} px):",
            index + 1,
            column.height,
            grid
        );
        if column.nodes.is_empty() {
            println!("  (empty)");
        }
        for placed in &column.nodes {
            match &placed.node {
                DisplayNode::Header { text, .. } => println!("  == {text} =="),
                DisplayNode::Item { data } => println!(
                    "  {:<40} {}",
                    data.label().unwrap_or_default(),
                    data.price_label()
                ),
                DisplayNode::Image { source, height } => {
                    println!("  [image {source}, {height:.0} px]");
                }
            }
        }
        println!();
    }

    println!(
        "{} items shown, {} nodes dropped, {} filler images",
        layout.visible_item_count(),
        layout.dropped_nodes,
        layout.images_used
    );
}
