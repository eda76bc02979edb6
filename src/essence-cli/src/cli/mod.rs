//! CLI argument definitions for essence
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod list;

pub use core::{CatalogueArgs, Cli, Commands};
pub use list::ListCommand;
