//! End-to-end tests for `menuboard item` commands.

use menuboard::models::ItemId;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn run_item(args: &[&str], temp: &TempDir) -> std::process::Output {
    let mut full = vec!["item"];
    full.extend_from_slice(args);
    isolated_command(&full, temp.path())
        .output()
        .expect("Failed to execute command")
}

fn is_selected(menu: &menuboard::models::Menu, id: u64) -> bool {
    menu.find_item(&ItemId::Number(id))
        .is_some_and(|item| item.is_selected)
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_item_select_and_deselect() {
    let temp = TempDir::new().unwrap();
    let menu_path = write_menu(temp.path(), &restaurant_menu());
    let path = menu_path.to_str().unwrap();

    let output = run_item(&["select", "--menu", path, "--id", "7"], &temp);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(is_selected(&read_menu(&menu_path), 7));

    let output = run_item(&["deselect", "--menu", path, "--id", "1"], &temp);
    assert_eq!(output.status.code(), Some(0));
    assert!(!is_selected(&read_menu(&menu_path), 1));
}

#[test]
fn test_item_toggle() {
    let temp = TempDir::new().unwrap();
    let menu_path = write_menu(temp.path(), &restaurant_menu());
    let path = menu_path.to_str().unwrap();

    let output = run_item(&["toggle", "--menu", path, "--id", "3"], &temp);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("selected"));
    assert!(is_selected(&read_menu(&menu_path), 3));
}

#[test]
fn test_item_unknown_id_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let menu_path = write_menu(temp.path(), &restaurant_menu());
    let before = std::fs::read_to_string(&menu_path).unwrap();

    let output = run_item(
        &["select", "--menu", menu_path.to_str().unwrap(), "--id", "999"],
        &temp,
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("'999' not found"));
    assert_eq!(std::fs::read_to_string(&menu_path).unwrap(), before);
}

#[test]
fn test_item_select_all_and_clear() {
    let temp = TempDir::new().unwrap();
    let menu_path = write_menu(temp.path(), &restaurant_menu());
    let path = menu_path.to_str().unwrap();

    let output = run_item(&["select-all", "--menu", path, "--category", "Drinks"], &temp);
    assert_eq!(output.status.code(), Some(0));
    let menu = read_menu(&menu_path);
    assert!(menu.categories[2].all_selected());

    let output = run_item(
        &["select-all", "--menu", path, "--category", "Drinks", "--deselect"],
        &temp,
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(!is_selected(&read_menu(&menu_path), 7));

    let output = run_item(&["clear", "--menu", path], &temp);
    assert_eq!(output.status.code(), Some(0));
    assert!(read_menu(&menu_path).selected_items().is_empty());
}

#[test]
fn test_item_select_all_unknown_category() {
    let temp = TempDir::new().unwrap();
    let menu_path = write_menu(temp.path(), &restaurant_menu());

    let output = run_item(
        &["select-all", "--menu", menu_path.to_str().unwrap(), "--category", "Desserts"],
        &temp,
    );
    assert_eq!(output.status.code(), Some(1));
}

// ============================================================================
// Availability and display edits
// ============================================================================

#[test]
fn test_item_toggle_availability() {
    let temp = TempDir::new().unwrap();
    let menu_path = write_menu(temp.path(), &restaurant_menu());

    let output = run_item(
        &["toggle-availability", "--menu", menu_path.to_str().unwrap(), "--id", "5"],
        &temp,
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("available"));

    let menu = read_menu(&menu_path);
    assert!(menu.find_item(&ItemId::Number(5)).unwrap().is_available);
}

#[test]
fn test_item_edit_display_fields() {
    let temp = TempDir::new().unwrap();
    let menu_path = write_menu(temp.path(), &restaurant_menu());
    let path = menu_path.to_str().unwrap();

    let output = run_item(
        &[
            "edit",
            "--menu",
            path,
            "--id",
            "1",
            "--display-name",
            "Tandoori Paneer",
            "--display-price",
            "₹249",
            "--available",
            "false",
        ],
        &temp,
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let menu = read_menu(&menu_path);
    let item = menu.find_item(&ItemId::Number(1)).unwrap();
    assert_eq!(item.label(), Some("Tandoori Paneer"));
    assert_eq!(item.display_price.as_deref(), Some("₹249"));
    assert!(!item.is_available);
    assert_eq!(item.name, "Paneer Tikka");

    // An empty display name restores the menu name
    let output = run_item(&["edit", "--menu", path, "--id", "1", "--display-name", ""], &temp);
    assert_eq!(output.status.code(), Some(0));
    let menu = read_menu(&menu_path);
    assert_eq!(
        menu.find_item(&ItemId::Number(1)).unwrap().label(),
        Some("Paneer Tikka")
    );
}

#[test]
fn test_item_edit_requires_a_field() {
    let temp = TempDir::new().unwrap();
    let menu_path = write_menu(temp.path(), &restaurant_menu());

    let output = run_item(&["edit", "--menu", menu_path.to_str().unwrap(), "--id", "1"], &temp);
    assert_eq!(output.status.code(), Some(1));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_item_move_within_category() {
    let temp = TempDir::new().unwrap();
    let menu_path = write_menu(temp.path(), &restaurant_menu());

    let output = run_item(
        &[
            "move",
            "--menu",
            menu_path.to_str().unwrap(),
            "--category",
            "Starters",
            "--from",
            "0",
            "--to",
            "2",
        ],
        &temp,
    );
    assert_eq!(output.status.code(), Some(0));

    let menu = read_menu(&menu_path);
    let names: Vec<&str> = menu.categories[0]
        .items
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["Gobi 65", "Hara Bhara Kabab", "Paneer Tikka"]);
}

#[test]
fn test_item_move_out_of_range() {
    let temp = TempDir::new().unwrap();
    let menu_path = write_menu(temp.path(), &restaurant_menu());

    let output = run_item(
        &[
            "move",
            "--menu",
            menu_path.to_str().unwrap(),
            "--category",
            "Starters",
            "--from",
            "0",
            "--to",
            "9",
        ],
        &temp,
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_item_move_category() {
    let temp = TempDir::new().unwrap();
    let menu_path = write_menu(temp.path(), &restaurant_menu());

    let output = run_item(
        &["move-category", "--menu", menu_path.to_str().unwrap(), "--from", "2", "--to", "0"],
        &temp,
    );
    assert_eq!(output.status.code(), Some(0));

    let menu = read_menu(&menu_path);
    let names: Vec<&str> = menu.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Drinks", "Starters", "Mains"]);
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn test_item_list_json() {
    let temp = TempDir::new().unwrap();
    let menu_path = write_menu(temp.path(), &restaurant_menu());

    let output = run_item(&["list", "--menu", menu_path.to_str().unwrap(), "--json"], &temp);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["selectedCount"], 4);
    assert_eq!(result["categories"][1]["category"], "Mains");
    assert_eq!(result["categories"][1]["items"][1]["price"], "Sold Out");
}
