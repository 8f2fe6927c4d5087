//! Menu item commands: selection, availability, display edits and ordering.
//!
//! Every mutating command loads the menu file, applies one operation and
//! writes the file back atomically.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::models::{ItemId, ItemUpdate, Menu};
use crate::services::MenuStore;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Manage menu items
#[derive(Debug, Clone, Args)]
pub struct ItemArgs {
    /// Item subcommand
    #[command(subcommand)]
    pub command: ItemCommand,
}

/// Item management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ItemCommand {
    /// List categories and items
    List(ListItemsArgs),
    /// Put an item on the board
    Select(ItemIdArgs),
    /// Take an item off the board
    Deselect(ItemIdArgs),
    /// Flip an item's selection
    Toggle(ItemIdArgs),
    /// Flip an item's availability (sold out / available)
    ToggleAvailability(ItemIdArgs),
    /// Edit an item's display name, display price or availability
    Edit(EditItemArgs),
    /// Select or deselect every item of a category
    SelectAll(SelectAllArgs),
    /// Deselect every item
    Clear(MenuFileArg),
    /// Move an item within its category
    Move(MoveItemArgs),
    /// Move a category within the menu
    MoveCategory(MoveCategoryArgs),
}

/// Menu file argument
#[derive(Debug, Clone, Args)]
pub struct MenuFileArg {
    /// Menu JSON file (defaults to the configured menu file)
    #[arg(short, long, value_name = "FILE")]
    pub menu: Option<PathBuf>,
}

/// List categories and items
#[derive(Debug, Clone, Args)]
pub struct ListItemsArgs {
    /// Menu file
    #[command(flatten)]
    pub file: MenuFileArg,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Identify one item
#[derive(Debug, Clone, Args)]
pub struct ItemIdArgs {
    /// Menu file
    #[command(flatten)]
    pub file: MenuFileArg,

    /// Item id
    #[arg(long, value_name = "ID")]
    pub id: String,
}

/// Edit an item's board-facing fields
#[derive(Debug, Clone, Args)]
pub struct EditItemArgs {
    /// Menu file
    #[command(flatten)]
    pub file: MenuFileArg,

    /// Item id
    #[arg(long, value_name = "ID")]
    pub id: String,

    /// Name shown on the board (empty string restores the menu name)
    #[arg(long, value_name = "TEXT")]
    pub display_name: Option<String>,

    /// Price shown on the board (empty string restores the menu price)
    #[arg(long, value_name = "TEXT")]
    pub display_price: Option<String>,

    /// Availability (true or false)
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub available: Option<bool>,
}

/// Select or deselect a whole category
#[derive(Debug, Clone, Args)]
pub struct SelectAllArgs {
    /// Menu file
    #[command(flatten)]
    pub file: MenuFileArg,

    /// Category name
    #[arg(long, value_name = "NAME")]
    pub category: String,

    /// Deselect instead of select
    #[arg(long)]
    pub deselect: bool,
}

/// Move an item within its category
#[derive(Debug, Clone, Args)]
pub struct MoveItemArgs {
    /// Menu file
    #[command(flatten)]
    pub file: MenuFileArg,

    /// Category name
    #[arg(long, value_name = "NAME")]
    pub category: String,

    /// Current position (0-based)
    #[arg(long, value_name = "INDEX")]
    pub from: usize,

    /// New position (0-based)
    #[arg(long, value_name = "INDEX")]
    pub to: usize,
}

/// Move a category within the menu
#[derive(Debug, Clone, Args)]
pub struct MoveCategoryArgs {
    /// Menu file
    #[command(flatten)]
    pub file: MenuFileArg,

    /// Current position (0-based)
    #[arg(long, value_name = "INDEX")]
    pub from: usize,

    /// New position (0-based)
    #[arg(long, value_name = "INDEX")]
    pub to: usize,
}

// JSON response types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListedItem {
    id: ItemId,
    label: Option<String>,
    price: String,
    is_selected: bool,
    is_available: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListedCategory {
    category: String,
    items: Vec<ListedItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListItemsResponse {
    categories: Vec<ListedCategory>,
    selected_count: usize,
}

impl ItemArgs {
    /// Execute the item command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ItemCommand::List(args) => args.execute(),
            ItemCommand::Select(args) => args.file.mutate(|menu| {
                menu.set_selected(&ItemId::parse(&args.id), true)?;
                Ok(format!("Item '{}' selected.", args.id))
            }),
            ItemCommand::Deselect(args) => args.file.mutate(|menu| {
                menu.set_selected(&ItemId::parse(&args.id), false)?;
                Ok(format!("Item '{}' deselected.", args.id))
            }),
            ItemCommand::Toggle(args) => args.file.mutate(|menu| {
                let selected = menu.toggle_selection(&ItemId::parse(&args.id))?;
                Ok(format!(
                    "Item '{}' {}.",
                    args.id,
                    if selected { "selected" } else { "deselected" }
                ))
            }),
            ItemCommand::ToggleAvailability(args) => args.file.mutate(|menu| {
                let available = menu.toggle_availability(&ItemId::parse(&args.id))?;
                Ok(format!(
                    "Item '{}' is now {}.",
                    args.id,
                    if available { "available" } else { "sold out" }
                ))
            }),
            ItemCommand::Edit(args) => args.execute(),
            ItemCommand::SelectAll(args) => args.file.mutate(|menu| {
                menu.select_all(&args.category, !args.deselect)?;
                Ok(format!(
                    "All items in '{}' {}.",
                    args.category,
                    if args.deselect { "deselected" } else { "selected" }
                ))
            }),
            ItemCommand::Clear(file) => file.mutate(|menu| {
                menu.clear_selection();
                Ok("Selection cleared.".to_string())
            }),
            ItemCommand::Move(args) => args.file.mutate(|menu| {
                menu.reorder_items(&args.category, args.from, args.to)?;
                Ok(format!(
                    "Moved item {} to {} in '{}'.",
                    args.from, args.to, args.category
                ))
            }),
            ItemCommand::MoveCategory(args) => args.file.mutate(|menu| {
                menu.reorder_categories(args.from, args.to)?;
                Ok(format!("Moved category {} to {}.", args.from, args.to))
            }),
        }
    }
}

impl MenuFileArg {
    fn load(&self) -> CliResult<(Menu, PathBuf)> {
        let config = load_config()?;
        let path = config
            .resolve_menu_file(self.menu.as_deref())
            .map_err(|e| CliError::validation(e.to_string()))?;
        let menu = MenuStore::load_menu(&path).map_err(|e| CliError::io(format!("{e:#}")))?;
        Ok((menu, path))
    }

    /// Loads the menu, applies `operation` and saves the result.
    ///
    /// Operation errors are validation errors and leave the file untouched.
    fn mutate<F>(&self, operation: F) -> CliResult<()>
    where
        F: FnOnce(&mut Menu) -> anyhow::Result<String>,
    {
        let (mut menu, path) = self.load()?;
        let message = operation(&mut menu).map_err(|e| CliError::validation(format!("{e:#}")))?;
        MenuStore::save_menu(&menu, &path).map_err(|e| CliError::io(format!("{e:#}")))?;
        println!("{message}");
        Ok(())
    }
}

impl ListItemsArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let (menu, _) = self.file.load()?;

        let categories: Vec<ListedCategory> = menu
            .categories
            .iter()
            .map(|category| ListedCategory {
                category: category.name.clone(),
                items: category
                    .items
                    .iter()
                    .map(|item| ListedItem {
                        id: item.id.clone(),
                        label: item.label().map(str::to_string),
                        price: item.price_label(),
                        is_selected: item.is_selected,
                        is_available: item.is_available,
                    })
                    .collect(),
            })
            .collect();

        let response = ListItemsResponse {
            categories,
            selected_count: menu.selected_items().len(),
        };

        if self.json {
            return print_json(&response);
        }

        for category in &response.categories {
            println!("{}:", category.category);
            for item in &category.items {
                println!(
                    "  [{}] {:<8} {:<40} {}",
                    if item.is_selected { "x" } else { " " },
                    item.id.to_string(),
                    item.label.as_deref().unwrap_or("(unnamed)"),
                    item.price
                );
            }
        }
        println!();
        println!("{} items selected.", response.selected_count);

        Ok(())
    }
}

impl EditItemArgs {
    /// Execute the edit command
    pub fn execute(&self) -> CliResult<()> {
        if self.display_name.is_none() && self.display_price.is_none() && self.available.is_none()
        {
            return Err(CliError::validation(
                "At least one field must be specified: --display-name, --display-price, or --available",
            ));
        }

        let update = ItemUpdate {
            display_name: self.display_name.clone(),
            display_price: self.display_price.clone(),
            is_available: self.available,
        };

        self.file.mutate(|menu| {
            menu.update_item(&ItemId::parse(&self.id), &update)?;
            Ok(format!("Item '{}' updated.", self.id))
        })
    }
}
