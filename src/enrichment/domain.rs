//! Internal domain models for aircraft lookup and caching.
//!
//! These types are OUR types - they don't change when the lookup API
//! changes. All external API responses get converted into these types via
//! adapters.

pub use crate::model::AircraftInfo;

/// One lookup cache slot.
///
/// A negative entry records that a lookup was attempted and found nothing;
/// it prevents repeat upstream calls for unregistered airframes and never
/// expires within a process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheEntry {
    /// Lookup succeeded
    Resolved(AircraftInfo),
    /// Lookup attempted, nothing found (or the upstream failed)
    NotFound,
}

impl CacheEntry {
    /// The cached registration, if this entry is positive.
    pub fn registration(&self) -> Option<&str> {
        match self {
            CacheEntry::Resolved(info) => Some(&info.registration),
            CacheEntry::NotFound => None,
        }
    }
}

/// Errors that can occur during an upstream lookup.
///
/// These never escape the enrichment cache - they all collapse into a
/// negative cache entry - but they are logged with their cause.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("rate limited - try again later")]
    RateLimited,
}
