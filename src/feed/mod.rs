//! Snapshot feed module - reads aircraft snapshots from a local receiver.
//!
//! # Architecture
//!
//! - **DTOs** (`dto.rs`) - exact wire shapes of a dump1090/readsb style
//!   `aircraft.json` document, including the field-name variants seen in the
//!   wild (`aircraft` vs `ac`, `hex` vs `icao`, `track` vs `heading`)
//! - **Adapter** (`adapter.rs`) - converts DTOs to [`Observation`]s,
//!   normalizing identifiers and filtering garbage registrations
//! - **Clients** (`client.rs`) - HTTP and local-file sources
//! - **Traits** (`traits.rs`) - [`SnapshotSource`] seam for injecting fakes
//!
//! A fetch or parse failure yields a [`FeedError`]; the tracker swallows it
//! and retries on the next cycle, so the feed never has retry logic of its
//! own.

pub mod adapter;
pub mod client;
pub mod dto;
pub mod traits;

pub use client::{FileFeed, HttpFeed};
pub use traits::SnapshotSource;

use crate::model::Observation;

/// Errors from fetching or parsing a snapshot batch.
///
/// All of these are transient-ignorable from the tracker's point of view.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Network(String),

    #[error("failed to parse snapshot document: {0}")]
    Parse(String),

    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a raw snapshot document into observations.
///
/// Shared by both clients so HTTP and file mode cannot drift apart.
pub fn parse_snapshot(raw: &str) -> Result<Vec<Observation>, FeedError> {
    let doc: dto::SnapshotDocument =
        serde_json::from_str(raw).map_err(|e| FeedError::Parse(e.to_string()))?;
    Ok(adapter::to_observations(doc))
}
