//! Snapshot feed clients.
//!
//! [`HttpFeed`] polls a receiver's `aircraft.json` endpoint over HTTP;
//! [`FileFeed`] reads the same document from a local path (for receivers
//! that only write to disk). Both share the parse path in the feed module.

use std::path::PathBuf;
use std::time::Duration;

use super::{FeedError, parse_snapshot};
use crate::model::Observation;

/// Per-request timeout. A hung receiver must not stall the poll loop.
const FETCH_TIMEOUT: Duration = Duration::from_secs(3);

/// HTTP snapshot source.
pub struct HttpFeed {
    http_client: reqwest::Client,
    url: String,
}

impl HttpFeed {
    /// Create a feed polling the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            url: url.into(),
        }
    }

    /// Fetch and parse one snapshot batch.
    pub async fn fetch(&self) -> Result<Vec<Observation>, FeedError> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;
        parse_snapshot(&body)
    }
}

/// Local-file snapshot source.
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    /// Create a feed reading the given `aircraft.json` path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse one snapshot batch.
    pub async fn fetch(&self) -> Result<Vec<Observation>, FeedError> {
        let path = self.path.clone();
        // Receiver files are small; still keep the sync read off the runtime
        let raw = tokio::task::spawn_blocking(move || std::fs::read_to_string(path))
            .await
            .map_err(|e| FeedError::Network(format!("read task failed: {e}")))??;
        parse_snapshot(&raw)
    }
}
