//! adsbdb HTTP client
//!
//! Handles communication with the adsbdb aircraft database.
//! See: https://www.adsbdb.com/
//!
//! Every request carries a short timeout so a hung upstream can never stall
//! a lookup task past its bound.

use std::time::Duration;

use super::{adapter, dto};
use crate::enrichment::domain::LookupError;
use crate::model::AircraftInfo;

/// Per-request timeout for lookup calls.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// User agent string, so upstream can identify callers
const USER_AGENT: &str = concat!("tailwatch/", env!("CARGO_PKG_VERSION"));

/// adsbdb API client
pub struct AdsbDbClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl AdsbDbClient {
    /// Create a new client
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://api.adsbdb.com/v0".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Look up an aircraft by its ICAO hex address.
    ///
    /// `Ok(None)` means the upstream answered and doesn't know the aircraft;
    /// errors cover transport and parse failures. The caller treats both the
    /// same way (negative cache entry), but errors are logged with a cause.
    pub async fn lookup(&self, hex: &str) -> Result<Option<AircraftInfo>, LookupError> {
        let url = format!("{}/aircraft/{}", self.base_url, hex.to_lowercase());

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();

        // adsbdb answers 404 with {"response": "unknown aircraft"}
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimited);
        }

        if !status.is_success() {
            return Err(LookupError::ApiError(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .json::<dto::LookupResponse>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        Ok(adapter::to_aircraft_info(body.response))
    }
}

impl Default for AdsbDbClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AdsbDbClient::new();
        assert_eq!(client.base_url, "https://api.adsbdb.com/v0");
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = AdsbDbClient::with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("tailwatch/"));
    }
}
