//! Error handling module
//!
//! Defines the library error type with appropriate exit codes

pub mod types;

pub use types::*;
