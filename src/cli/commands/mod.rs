//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `run`: the tracker service (also the default when no command is given)
//! - `registry`: aircraft registry maintenance
//! - `events`: read-only queries over the visit log

mod events;
mod registry;
mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use events::{cmd_recent, cmd_top};
pub use registry::cmd_normalize;
pub use run::cmd_run;

/// Tailwatch CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the tracker service (default)
    Run {
        /// Receiver snapshot URL, overriding the config file
        #[arg(long)]
        url: Option<String>,
        /// Read snapshots from a local file instead of HTTP
        #[arg(long, conflicts_with = "url")]
        file: Option<PathBuf>,
    },
    /// Recompute canonical type names for every registry entry
    Normalize {
        /// Database path
        #[arg(long, default_value = "tailwatch.db")]
        db: PathBuf,
        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the most recent visit events
    Recent {
        /// Database path
        #[arg(long, default_value = "tailwatch.db")]
        db: PathBuf,
        /// Maximum number of events to show
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },
    /// Show the most frequent visitors
    Top {
        /// Database path
        #[arg(long, default_value = "tailwatch.db")]
        db: PathBuf,
        /// Only count visits within the last N hours (default: all time)
        #[arg(long)]
        hours: Option<i64>,
        /// Maximum number of registrations to show
        #[arg(short, long, default_value = "10")]
        limit: i64,
    },
}

/// Run the specified CLI command.
///
/// No subcommand means run the tracker service.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    match &cli.command {
        None => cmd_run(&rt, None, None)?,
        Some(Commands::Run { url, file }) => cmd_run(&rt, url.as_deref(), file.as_deref())?,
        Some(Commands::Normalize { db, dry_run }) => cmd_normalize(&rt, db, *dry_run)?,
        Some(Commands::Recent { db, limit }) => cmd_recent(&rt, db, *limit)?,
        Some(Commands::Top { db, hours, limit }) => cmd_top(&rt, db, *hours, *limit)?,
    }
    Ok(())
}
