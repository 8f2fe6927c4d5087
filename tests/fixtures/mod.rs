//! Shared test fixtures for engine and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use menuboard::models::{Menu, MenuCategory, MenuItem, Orientation, ThemeConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Builds `count` selected, available items sharing one label.
///
/// Ids start at `first_id` so several categories can be combined without
/// clashes.
pub fn uniform_items(first_id: u64, count: usize, label: &str) -> Vec<MenuItem> {
    (0..count as u64)
        .map(|offset| MenuItem::new(first_id + offset, label, 120.0).selected())
        .collect()
}

/// One "Starters" category with three short, selected, available items.
pub fn starters_menu() -> Menu {
    Menu::new(vec![MenuCategory::new(
        "Starters",
        vec![
            MenuItem::new(1, "Paneer Tikka", 220.0).selected(),
            MenuItem::new(2, "Gobi 65", 160.0).selected(),
            MenuItem::new(3, "Hara Bhara Kabab", 180.0).selected(),
        ],
    )])
}

/// A realistic menu with selected and unselected items across categories.
pub fn restaurant_menu() -> Menu {
    Menu::new(vec![
        MenuCategory::new(
            "Starters",
            vec![
                MenuItem::new(1, "Paneer Tikka", 220.0).selected(),
                MenuItem::new(2, "Gobi 65", 160.0).selected(),
                MenuItem::new(3, "Hara Bhara Kabab", 180.0),
            ],
        ),
        MenuCategory::new(
            "Mains",
            vec![
                MenuItem::new(4, "Veg Biryani", 240.0).selected(),
                MenuItem::new(5, "Dal Makhani", 210.0).with_availability(false).selected(),
                MenuItem::new(6, "Butter Naan", 40.0),
            ],
        ),
        MenuCategory::new(
            "Drinks",
            vec![
                MenuItem::new(7, "Masala Chai", 30.0),
                MenuItem::new(8, "Sweet Lassi", 60.0),
            ],
        ),
    ])
}

/// Short, medium and long names spread over two categories.
pub fn mixed_menu() -> Menu {
    let mut first = uniform_items(1, 10, "Paneer Tikka");
    first.extend(uniform_items(11, 5, "Chicken 65 dry roast special"));
    Menu::new(vec![
        MenuCategory::new("Starters", first),
        MenuCategory::new(
            "Mains",
            uniform_items(16, 12, "Veg Biryani Family Pack with extra raita"),
        ),
    ])
}

/// Theme with a given orientation and font scale, otherwise default.
pub fn theme_with(orientation: Orientation, font_size_scale: f64) -> ThemeConfig {
    ThemeConfig {
        orientation,
        font_size_scale,
        ..ThemeConfig::default()
    }
}

/// Writes a menu as JSON into `dir` and returns the file path.
pub fn write_menu(dir: &Path, menu: &Menu) -> PathBuf {
    let path = dir.join("menu.json");
    fs::write(&path, serde_json::to_string_pretty(menu).unwrap()).unwrap();
    path
}

/// Writes a theme as JSON into `dir` and returns the file path.
pub fn write_theme(dir: &Path, theme: &ThemeConfig) -> PathBuf {
    let path = dir.join("theme.json");
    fs::write(&path, serde_json::to_string_pretty(theme).unwrap()).unwrap();
    path
}

/// Creates a temp directory holding `menu.json`.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn create_temp_menu_file(menu: &Menu) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = write_menu(temp_dir.path(), menu);
    (path, temp_dir)
}

/// Reads a menu back from disk.
pub fn read_menu(path: &Path) -> Menu {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Path to the menuboard binary (set by cargo at compile time)
pub fn menuboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_menuboard")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share configuration
/// within one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(menuboard_bin());
    cmd.env("MENUBOARD_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}
