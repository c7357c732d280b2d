//! Command-line interface module
//!
//! Handles argument parsing, the platform metadata fetch and command output

pub mod args;
pub mod commands;
pub mod metadata;
pub mod output;

pub use args::*;
pub use commands::execute;
