//! Tailwatch - an ADS-B aircraft visit tracker.
//!
//! Polls a local receiver's snapshot feed, turns continuous sightings into
//! visit events, and enriches each aircraft with its registration and a
//! canonical type name from an external lookup service.

pub mod cli;
pub mod config;
pub mod db;
pub mod enrichment;
pub mod error;
pub mod feed;
pub mod model;
pub mod normalizer;
pub mod tracker;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("tailwatch=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
