//! Service layer for board logic.
//!
//! Flattening, packing and capacity estimation are pure functions over a
//! menu snapshot and a theme. `store` is the only module that touches the
//! file system.

pub mod board;
pub mod capacity;
pub mod flatten;
pub mod geometry;
pub mod layout;
pub mod store;

// Re-export commonly used types and functions
pub use board::{BoardState, CapacityKey, CapacitySource};
pub use capacity::{estimate_capacity, CapacityResult, CapacityStatus};
pub use flatten::{flatten_menu, DisplayNode};
pub use geometry::CanvasGeometry;
pub use layout::{layout_board, BoardLayout, Column, LayoutOptions, PlacedNode};
pub use store::MenuStore;
