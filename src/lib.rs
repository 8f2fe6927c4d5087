//! MenuBoard Library
//!
//! This library provides the core of a digital menu-board designer: menu and
//! theme models, the column-packing layout engine, the capacity estimator
//! and the file and configuration plumbing around them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
