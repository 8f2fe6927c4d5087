//! CLI command handlers for MenuBoard.
//!
//! This module provides headless, scriptable access to the board designer:
//! layout passes, capacity estimates, menu edits and display payloads.

pub mod capacity;
pub mod common;
pub mod config;
pub mod display;
pub mod item;
pub mod layout;

// Re-export types used by main.rs and tests
pub use capacity::CapacityArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use display::DisplayArgs;
pub use item::ItemArgs;
pub use layout::LayoutArgs;
