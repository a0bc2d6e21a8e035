//! pyan-maint - Maintenance toolchain for the pyan source package
//!
//! This crate provides functionality for:
//! - Removing bytecode caches and packaging metadata
//! - Reporting per-file and total source line counts
//! - Running a style checker over the package sources

pub mod checker;
pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod lines;
pub mod walk;

// Re-export commonly used types
pub use config::Config;
pub use error::{MaintError, Result};
