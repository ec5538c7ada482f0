//! Command-line interface for tailwatch.
//!
//! This module provides the tracker service entry point plus maintenance
//! and query commands against the visit database.

mod commands;

pub use commands::{Cli, Commands, run_command};
