//! Trait definition for the snapshot source seam.
//!
//! Production code uses [`HttpFeed`] or [`FileFeed`]; tests substitute mock
//! implementations with scripted batches.

use async_trait::async_trait;

use super::FeedError;
use super::client::{FileFeed, HttpFeed};
use crate::model::Observation;

/// Trait for fetching one snapshot batch from the receiver.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch the current snapshot batch.
    async fn fetch(&self) -> Result<Vec<Observation>, FeedError>;
}

#[async_trait]
impl SnapshotSource for HttpFeed {
    async fn fetch(&self) -> Result<Vec<Observation>, FeedError> {
        self.fetch().await
    }
}

#[async_trait]
impl SnapshotSource for FileFeed {
    async fn fetch(&self) -> Result<Vec<Observation>, FeedError> {
        self.fetch().await
    }
}

/// Mock snapshot sources for testing.
#[cfg(test)]
pub mod mocks {
    use super::*;
    use parking_lot::Mutex;

    /// Mock feed that returns scripted batches in sequence.
    ///
    /// Once the script is exhausted it keeps returning the last batch.
    /// An empty script fails every fetch, modeling a dead receiver.
    pub struct MockFeed {
        batches: Mutex<Vec<Vec<Observation>>>,
        current: Mutex<Option<Vec<Observation>>>,
    }

    impl MockFeed {
        /// Create a mock that serves the given batches in order.
        pub fn with_batches(batches: Vec<Vec<Observation>>) -> Self {
            Self {
                batches: Mutex::new(batches.into_iter().rev().collect()),
                current: Mutex::new(None),
            }
        }

        /// Create a mock that fails every fetch.
        pub fn failing() -> Self {
            Self {
                batches: Mutex::new(Vec::new()),
                current: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl SnapshotSource for MockFeed {
        async fn fetch(&self) -> Result<Vec<Observation>, FeedError> {
            if let Some(batch) = self.batches.lock().pop() {
                *self.current.lock() = Some(batch.clone());
                return Ok(batch);
            }
            match self.current.lock().clone() {
                Some(batch) => Ok(batch),
                None => Err(FeedError::Network("mock feed offline".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_mock_feed_sequences_batches() {
        let obs = Observation {
            hex: "A1B2C3".to_string(),
            registration: None,
            rssi: None,
            lat: None,
            lon: None,
            track: None,
        };
        let feed = MockFeed::with_batches(vec![vec![obs.clone()], vec![]]);

        assert_eq!(feed.fetch().await.unwrap().len(), 1);
        assert_eq!(feed.fetch().await.unwrap().len(), 0);
        // Script exhausted: repeats the last batch
        assert_eq!(feed.fetch().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_mock_feed_failing() {
        let feed = MockFeed::failing();
        assert!(feed.fetch().await.is_err());
    }
}
