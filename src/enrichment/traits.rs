//! Trait definition for the lookup service seam.
//!
//! Production code uses [`AdsbDbClient`]; tests substitute mock
//! implementations to script lookup outcomes and count upstream calls.

use async_trait::async_trait;

use super::adsbdb::AdsbDbClient;
use super::domain::LookupError;
use crate::model::AircraftInfo;

/// Trait for aircraft identity lookup.
///
/// `Ok(None)` is a definitive "not found"; `Err` is a transport-level
/// failure. The enrichment cache treats both as negative outcomes.
#[async_trait]
pub trait AircraftLookupApi: Send + Sync {
    /// Look up an aircraft by ICAO hex address.
    async fn lookup(&self, hex: &str) -> Result<Option<AircraftInfo>, LookupError>;
}

#[async_trait]
impl AircraftLookupApi for AdsbDbClient {
    async fn lookup(&self, hex: &str) -> Result<Option<AircraftInfo>, LookupError> {
        self.lookup(hex).await
    }
}

/// Mock lookup clients for testing.
#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock lookup that returns a fixed outcome and counts calls.
    pub struct MockLookup {
        /// Result to return on every call
        pub result: Option<AircraftInfo>,
        /// Error to return (takes precedence over result)
        pub error: Option<LookupError>,
        /// Number of lookup calls made
        pub calls: AtomicUsize,
    }

    impl MockLookup {
        /// Create a mock that resolves every hex to the given registration.
        pub fn resolving(registration: &str) -> Self {
            Self {
                result: Some(AircraftInfo {
                    registration: registration.to_string(),
                    aircraft_type: Some("737-8H4".to_string()),
                    manufacturer: Some("THE BOEING COMPANY".to_string()),
                    icao_type: Some("B738".to_string()),
                }),
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        /// Create a mock that finds nothing.
        pub fn not_found() -> Self {
            Self {
                result: None,
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        /// Create a mock that fails every call.
        pub fn failing() -> Self {
            Self {
                result: None,
                error: Some(LookupError::Network("timeout".to_string())),
                calls: AtomicUsize::new(0),
            }
        }

        /// Number of upstream calls made so far.
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AircraftLookupApi for MockLookup {
        async fn lookup(&self, _hex: &str) -> Result<Option<AircraftInfo>, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            Ok(self.result.clone())
        }
    }

    #[tokio::test]
    async fn test_mock_lookup_counts_calls() {
        let mock = MockLookup::resolving("N12345");
        assert_eq!(mock.call_count(), 0);

        let info = mock.lookup("A1B2C3").await.unwrap().unwrap();
        assert_eq!(info.registration, "N12345");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_lookup_failing() {
        let mock = MockLookup::failing();
        assert!(matches!(
            mock.lookup("A1B2C3").await,
            Err(LookupError::Network(_))
        ));
    }
}
