//! Registry cache - resolves hex identifiers cache-first with negative
//! caching and write-through persistence.
//!
//! The cache is shared read/write across the poll loop, the refresher loop,
//! and fire-and-forget lookup tasks. Concurrent resolution of the same
//! identifier is last-writer-wins: resolving twice yields the same persisted
//! result, so no coordination beyond the map lock is needed. The lock is
//! never held across an await point.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use super::domain::CacheEntry;
use super::traits::AircraftLookupApi;
use crate::model::{AircraftInfo, RegistryEntry};
use crate::normalizer;

/// In-memory lookup cache with write-through registry persistence.
pub struct RegistryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    lookup: Arc<dyn AircraftLookupApi>,
    pool: SqlitePool,
}

impl RegistryCache {
    /// Create an empty cache backed by the given lookup client and pool.
    pub fn new(lookup: Arc<dyn AircraftLookupApi>, pool: SqlitePool) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            lookup,
            pool,
        }
    }

    /// Cache-only registration lookup. Never performs I/O.
    pub fn get_cached(&self, hex: &str) -> Option<String> {
        self.entries
            .read()
            .get(&hex.to_uppercase())
            .and_then(|e| e.registration().map(str::to_string))
    }

    /// Bulk-populate the cache from persisted registry entries.
    ///
    /// Called once at startup so previously resolved identifiers never
    /// re-trigger an upstream call.
    pub fn preload(&self, persisted: HashMap<String, RegistryEntry>) {
        let mut entries = self.entries.write();
        for (hex, entry) in persisted {
            entries.insert(
                hex.to_uppercase(),
                CacheEntry::Resolved(AircraftInfo {
                    registration: entry.registration,
                    aircraft_type: entry.aircraft_type,
                    manufacturer: entry.manufacturer,
                    icao_type: entry.icao_type,
                }),
            );
        }
        if !entries.is_empty() {
            info!(count = entries.len(), "Loaded registrations from registry");
        }
    }

    /// Resolve an identifier, honoring negative cache entries.
    ///
    /// On a miss performs exactly one upstream call, caches the outcome
    /// (positive or negative), and on success persists a registry entry
    /// before returning. Upstream failures are swallowed into a negative
    /// entry - enrichment is best-effort.
    pub async fn resolve(&self, hex: &str) -> Option<AircraftInfo> {
        self.resolve_inner(hex, true).await
    }

    /// Resolve an identifier, retrying past a negative cache entry.
    ///
    /// Used by the periodic refresher, which re-issues lookups for live
    /// sessions that are still unresolved; a positive entry is still served
    /// from cache.
    pub async fn resolve_fresh(&self, hex: &str) -> Option<AircraftInfo> {
        self.resolve_inner(hex, false).await
    }

    async fn resolve_inner(&self, hex: &str, honor_negative: bool) -> Option<AircraftInfo> {
        let hex = hex.to_uppercase();

        match self.entries.read().get(&hex) {
            Some(CacheEntry::Resolved(info)) => return Some(info.clone()),
            Some(CacheEntry::NotFound) if honor_negative => return None,
            _ => {}
        }

        let outcome = match self.lookup.lookup(&hex).await {
            Ok(found) => found,
            Err(e) => {
                debug!(hex = %hex, error = %e, "Lookup failed, caching negative result");
                None
            }
        };

        match outcome {
            Some(info) => {
                self.entries
                    .write()
                    .insert(hex.clone(), CacheEntry::Resolved(info.clone()));
                self.persist(&hex, &info).await;
                Some(info)
            }
            None => {
                self.entries.write().insert(hex, CacheEntry::NotFound);
                None
            }
        }
    }

    /// Write a resolved aircraft through to the registry table, computing
    /// the canonical display name alongside the raw fields.
    async fn persist(&self, hex: &str, info: &AircraftInfo) {
        let entry = RegistryEntry {
            hex: hex.to_string(),
            registration: info.registration.clone(),
            aircraft_type: info.aircraft_type.clone(),
            manufacturer: info.manufacturer.clone(),
            icao_type: info.icao_type.clone(),
            normalized_type: normalized_display(info),
            last_updated: Utc::now().timestamp(),
        };

        if let Err(e) = crate::db::upsert_registry_entry(&self.pool, &entry).await {
            warn!(hex = %hex, error = %e, "Failed to persist registry entry");
        } else {
            info!(hex = %hex, registration = %entry.registration, "Resolved aircraft");
        }
    }
}

/// Canonical display name for a resolved aircraft, or None when the
/// normalizer can say nothing ("Unknown" is not worth caching).
pub fn normalized_display(info: &AircraftInfo) -> Option<String> {
    if info.manufacturer.is_none() && info.aircraft_type.is_none() && info.icao_type.is_none() {
        return None;
    }
    let display = normalizer::normalize(
        info.manufacturer.as_deref(),
        info.aircraft_type.as_deref(),
        info.icao_type.as_deref(),
    );
    (display != normalizer::UNKNOWN).then_some(display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{self, db_url, init_db};
    use crate::enrichment::traits::mocks::MockLookup;

    async fn test_cache(lookup: Arc<MockLookup>) -> (tempfile::TempDir, Arc<MockLookup>, RegistryCache) {
        let temp_dir = tempfile::tempdir().unwrap();
        let pool = init_db(&db_url(Some(&temp_dir.path().join("test.db"))))
            .await
            .unwrap();
        let cache = RegistryCache::new(lookup.clone(), pool);
        (temp_dir, lookup, cache)
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let (_dir, lookup, cache) = test_cache(Arc::new(MockLookup::resolving("N12345"))).await;

        let first = cache.resolve("a1b2c3").await.unwrap();
        let second = cache.resolve("A1B2C3").await.unwrap();

        assert_eq!(first, second);
        // Second call is cache-served
        assert_eq!(lookup.call_count(), 1);
    }

    #[tokio::test]
    async fn test_resolve_persists_registry_entry() {
        let (_dir, _lookup, cache) = test_cache(Arc::new(MockLookup::resolving("N12345"))).await;

        cache.resolve("A1B2C3").await.unwrap();

        let entries = db::load_registry_entries(&cache.pool).await.unwrap();
        let entry = &entries["A1B2C3"];
        assert_eq!(entry.registration, "N12345");
        assert_eq!(entry.normalized_type.as_deref(), Some("Boeing 737-800"));
    }

    #[tokio::test]
    async fn test_negative_caching_on_not_found() {
        let (_dir, lookup, cache) = test_cache(Arc::new(MockLookup::not_found())).await;

        assert!(cache.resolve("A1B2C3").await.is_none());
        assert!(cache.resolve("A1B2C3").await.is_none());
        assert_eq!(lookup.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_negative_results() {
        let (_dir, lookup, cache) = test_cache(Arc::new(MockLookup::failing())).await;

        assert!(cache.resolve("A1B2C3").await.is_none());
        assert!(cache.resolve("A1B2C3").await.is_none());
        assert_eq!(lookup.call_count(), 1);
        assert!(cache.get_cached("A1B2C3").is_none());
    }

    #[tokio::test]
    async fn test_resolve_fresh_retries_negative_entries() {
        let (_dir, lookup, cache) = test_cache(Arc::new(MockLookup::not_found())).await;

        assert!(cache.resolve("A1B2C3").await.is_none());
        assert!(cache.resolve_fresh("A1B2C3").await.is_none());
        assert_eq!(lookup.call_count(), 2);
    }

    #[tokio::test]
    async fn test_resolve_fresh_still_serves_positive_entries() {
        let (_dir, lookup, cache) = test_cache(Arc::new(MockLookup::resolving("N12345"))).await;

        cache.resolve("A1B2C3").await.unwrap();
        cache.resolve_fresh("A1B2C3").await.unwrap();
        assert_eq!(lookup.call_count(), 1);
    }

    #[tokio::test]
    async fn test_preload_prevents_upstream_calls() {
        let (_dir, lookup, cache) = test_cache(Arc::new(MockLookup::resolving("N99999"))).await;

        let mut persisted = HashMap::new();
        persisted.insert(
            "a1b2c3".to_string(),
            RegistryEntry {
                hex: "a1b2c3".to_string(),
                registration: "N12345".to_string(),
                aircraft_type: None,
                manufacturer: None,
                icao_type: None,
                normalized_type: None,
                last_updated: 0,
            },
        );
        cache.preload(persisted);

        assert_eq!(cache.get_cached("A1B2C3").as_deref(), Some("N12345"));
        let info = cache.resolve("A1B2C3").await.unwrap();
        assert_eq!(info.registration, "N12345");
        assert_eq!(lookup.call_count(), 0);
    }

    #[test]
    fn test_normalized_display_unknown_is_none() {
        let info = AircraftInfo {
            registration: "N12345".to_string(),
            aircraft_type: None,
            manufacturer: None,
            icao_type: None,
        };
        assert_eq!(normalized_display(&info), None);
    }
}
