//! Database module for visit event and aircraft registry persistence.
//!
//! Uses SQLx with SQLite for lightweight, embedded database storage.
//! Provides async operations for:
//! - Appending visit events (one per arrival into coverage)
//! - Upserting and loading aircraft registry entries
//! - Read queries consumed by the dashboard layer and CLI
//!
//! # Example
//!
//! ```ignore
//! use tailwatch::db::{init_db, insert_visit_event};
//!
//! let pool = init_db("sqlite:tailwatch.db").await?;
//! insert_visit_event(&pool, &event).await?;
//! ```

use std::path::Path;

use crate::model::{RegistryEntry, VisitEvent};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::collections::HashMap;

/// Default database filename.
pub const DEFAULT_DB_NAME: &str = "tailwatch.db";

/// Build a SQLite database URL from an optional path.
///
/// If no path is provided, uses [`DEFAULT_DB_NAME`] in the current directory.
pub fn db_url(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!("sqlite:{}", p.display()),
        None => format!("sqlite:{}", DEFAULT_DB_NAME),
    }
}

/// Initialize the database connection pool and run migrations.
///
/// Creates the database file if it doesn't exist, establishes a connection
/// pool with up to 5 connections, and runs all pending migrations.
///
/// # Errors
///
/// Returns an error if:
/// - Database creation fails
/// - Connection cannot be established
/// - Migration fails
pub async fn init_db(db_url: &str) -> Result<SqlitePool, sqlx::Error> {
    if !sqlx::Sqlite::database_exists(db_url).await.unwrap_or(false) {
        sqlx::Sqlite::create_database(db_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Append one visit event.
///
/// Events are append-only: there is no update or delete path in the service.
pub async fn insert_visit_event(pool: &SqlitePool, event: &VisitEvent) -> sqlx::Result<()> {
    sqlx::query(
        "INSERT INTO events (observed_at, hex, registration, rssi, lat, lon) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(event.observed_at)
    .bind(&event.hex)
    .bind(&event.registration)
    .bind(event.rssi)
    .bind(event.lat)
    .bind(event.lon)
    .execute(pool)
    .await?;
    Ok(())
}

/// Insert or replace a registry entry for one hex identifier.
///
/// The normalized display name is computed by the caller (the enrichment
/// cache), so this stays a plain write.
pub async fn upsert_registry_entry(pool: &SqlitePool, entry: &RegistryEntry) -> sqlx::Result<()> {
    sqlx::query(
        "INSERT OR REPLACE INTO aircraft_registry \
         (hex, registration, aircraft_type, manufacturer, icao_type, normalized_type, last_updated) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&entry.hex)
    .bind(&entry.registration)
    .bind(&entry.aircraft_type)
    .bind(&entry.manufacturer)
    .bind(&entry.icao_type)
    .bind(&entry.normalized_type)
    .bind(entry.last_updated)
    .execute(pool)
    .await?;
    Ok(())
}

/// Load all registry entries, keyed by hex.
///
/// Used at startup to preload the lookup cache so previously resolved
/// identifiers never re-trigger an upstream call.
pub async fn load_registry_entries(
    pool: &SqlitePool,
) -> sqlx::Result<HashMap<String, RegistryEntry>> {
    let entries = sqlx::query_as::<_, RegistryEntry>(
        "SELECT hex, registration, aircraft_type, manufacturer, icao_type, \
                normalized_type, last_updated \
         FROM aircraft_registry",
    )
    .fetch_all(pool)
    .await?;

    Ok(entries.into_iter().map(|e| (e.hex.clone(), e)).collect())
}

/// Most recent visit per hex since the given timestamp.
///
/// Used by startup recovery: aircraft seen shortly before a restart are
/// re-registered as live sessions so the next observation does not log a
/// duplicate arrival.
pub async fn recent_visits(
    pool: &SqlitePool,
    since: i64,
) -> sqlx::Result<Vec<(String, Option<String>, i64)>> {
    sqlx::query_as(
        "SELECT hex, registration, MAX(observed_at) FROM events \
         WHERE observed_at > ? GROUP BY hex",
    )
    .bind(since)
    .fetch_all(pool)
    .await
}

/// A visit event joined with the registry for display.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecentEvent {
    /// Epoch seconds of the arrival
    pub observed_at: i64,
    /// ICAO hex identifier
    pub hex: String,
    /// Registry registration, falling back to the event's own field
    pub registration: Option<String>,
    /// Canonical aircraft type, when the registry knows it
    pub normalized_type: Option<String>,
}

/// Most recent visit events, newest first, joined with the registry.
pub async fn recent_events(pool: &SqlitePool, limit: i64) -> sqlx::Result<Vec<RecentEvent>> {
    sqlx::query_as::<_, RecentEvent>(
        "SELECT e.observed_at, e.hex, \
                COALESCE(ar.registration, e.registration) AS registration, \
                ar.normalized_type \
         FROM events e \
         LEFT JOIN aircraft_registry ar ON e.hex = ar.hex \
         ORDER BY e.observed_at DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Visit-count leaderboard of registrations since the given timestamp.
///
/// Pass `since = 0` for all-time. Only aircraft with a resolved registry
/// registration are ranked.
pub async fn top_registrations(
    pool: &SqlitePool,
    since: i64,
    limit: i64,
) -> sqlx::Result<Vec<(String, i64)>> {
    sqlx::query_as(
        "SELECT ar.registration, COUNT(*) AS c \
         FROM events e \
         JOIN aircraft_registry ar ON e.hex = ar.hex \
         WHERE e.observed_at >= ? AND ar.registration IS NOT NULL \
         GROUP BY ar.registration ORDER BY c DESC LIMIT ?",
    )
    .bind(since)
    .bind(limit)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> (tempfile::TempDir, SqlitePool) {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let url = db_url(Some(&db_path));
        let pool = init_db(&url).await.expect("Failed to init db");
        (temp_dir, pool)
    }

    fn event(hex: &str, observed_at: i64, registration: Option<&str>) -> VisitEvent {
        VisitEvent {
            observed_at,
            hex: hex.to_string(),
            registration: registration.map(str::to_string),
            rssi: Some(-10.0),
            lat: Some(40.0),
            lon: Some(-74.0),
        }
    }

    fn entry(hex: &str, registration: &str) -> RegistryEntry {
        RegistryEntry {
            hex: hex.to_string(),
            registration: registration.to_string(),
            aircraft_type: Some("737-8H4".to_string()),
            manufacturer: Some("BOEING".to_string()),
            icao_type: Some("B738".to_string()),
            normalized_type: Some("Boeing 737-800".to_string()),
            last_updated: 1_700_000_000,
        }
    }

    #[tokio::test]
    async fn test_init_db_creates_database() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let url = db_url(Some(&db_path));

        let pool = init_db(&url).await.expect("Failed to init db");
        assert!(db_path.exists());

        let events = recent_events(&pool, 10).await.expect("Failed to query");
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_insert_and_read_events() {
        let (_dir, pool) = test_pool().await;

        insert_visit_event(&pool, &event("A1B2C3", 100, Some("N12345")))
            .await
            .unwrap();
        insert_visit_event(&pool, &event("C0FFEE", 200, None))
            .await
            .unwrap();

        let events = recent_events(&pool, 10).await.unwrap();
        assert_eq!(events.len(), 2);
        // Newest first
        assert_eq!(events[0].hex, "C0FFEE");
        assert_eq!(events[1].registration.as_deref(), Some("N12345"));
    }

    #[tokio::test]
    async fn test_registry_upsert_replaces() {
        let (_dir, pool) = test_pool().await;

        upsert_registry_entry(&pool, &entry("A1B2C3", "N12345"))
            .await
            .unwrap();
        let mut updated = entry("A1B2C3", "N99999");
        updated.last_updated = 1_700_000_100;
        upsert_registry_entry(&pool, &updated).await.unwrap();

        let entries = load_registry_entries(&pool).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["A1B2C3"].registration, "N99999");
        assert_eq!(entries["A1B2C3"].last_updated, 1_700_000_100);
    }

    #[tokio::test]
    async fn test_recent_visits_groups_by_hex() {
        let (_dir, pool) = test_pool().await;

        insert_visit_event(&pool, &event("A1B2C3", 100, None)).await.unwrap();
        insert_visit_event(&pool, &event("A1B2C3", 300, Some("N12345")))
            .await
            .unwrap();
        insert_visit_event(&pool, &event("C0FFEE", 50, None)).await.unwrap();

        // Cutoff excludes the C0FFEE visit entirely
        let visits = recent_visits(&pool, 60).await.unwrap();
        assert_eq!(visits.len(), 1);
        let (hex, _reg, last) = &visits[0];
        assert_eq!(hex, "A1B2C3");
        assert_eq!(*last, 300);
    }

    #[tokio::test]
    async fn test_recent_events_prefers_registry_registration() {
        let (_dir, pool) = test_pool().await;

        insert_visit_event(&pool, &event("A1B2C3", 100, None)).await.unwrap();
        upsert_registry_entry(&pool, &entry("A1B2C3", "N12345"))
            .await
            .unwrap();

        let events = recent_events(&pool, 10).await.unwrap();
        assert_eq!(events[0].registration.as_deref(), Some("N12345"));
        assert_eq!(events[0].normalized_type.as_deref(), Some("Boeing 737-800"));
    }

    #[tokio::test]
    async fn test_top_registrations_window() {
        let (_dir, pool) = test_pool().await;

        upsert_registry_entry(&pool, &entry("A1B2C3", "N12345"))
            .await
            .unwrap();
        upsert_registry_entry(&pool, &entry("C0FFEE", "N54321"))
            .await
            .unwrap();

        insert_visit_event(&pool, &event("A1B2C3", 100, None)).await.unwrap();
        insert_visit_event(&pool, &event("A1B2C3", 200, None)).await.unwrap();
        insert_visit_event(&pool, &event("C0FFEE", 150, None)).await.unwrap();

        let top = top_registrations(&pool, 0, 10).await.unwrap();
        assert_eq!(top[0], ("N12345".to_string(), 2));
        assert_eq!(top[1], ("N54321".to_string(), 1));

        // Windowed query drops the older A1B2C3 visit
        let top = top_registrations(&pool, 150, 10).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].1, 1);
    }
}
