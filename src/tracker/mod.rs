//! Presence tracker - turns receiver snapshots into visit events.
//!
//! One [`Session`] exists per aircraft currently in coverage. A session is
//! created on the first observation after an absence, which is the moment a
//! visit event is written; it is evicted once the aircraft has not been seen
//! for the eviction window. Re-observation within the window extends the
//! session without a second event.
//!
//! Within one poll cycle all observations are applied before eviction runs,
//! so an aircraft present in the current batch can never be evicted by that
//! same batch.
//!
//! Lookup work never blocks the poll loop: unresolved arrivals trigger
//! fire-and-forget tasks against the enrichment cache, and a periodic
//! refresher retries the stragglers with a bounded fan-out.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use parking_lot::RwLock;
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::enrichment::RegistryCache;
use crate::feed::SnapshotSource;
use crate::model::{Session, SessionSnapshot, VisitEvent};

/// Tuning knobs for the presence state machine.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Seconds of absence after which a session is evicted
    pub eviction_window: i64,
    /// Seconds before startup within which prior visits are re-registered
    pub recovery_window: i64,
    /// Maximum lookup tasks spawned per refresher pass
    pub lookup_batch: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            eviction_window: 600,
            recovery_window: 1800,
            lookup_batch: 20,
        }
    }
}

/// Session state machine over one snapshot source.
pub struct Tracker {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    cache: Arc<RegistryCache>,
    pool: SqlitePool,
    source: Arc<dyn SnapshotSource>,
    config: TrackerConfig,
}

impl Tracker {
    /// Create a tracker with no live sessions.
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        cache: Arc<RegistryCache>,
        pool: SqlitePool,
        config: TrackerConfig,
    ) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            cache,
            pool,
            source,
            config,
        }
    }

    /// Re-register sessions for aircraft seen shortly before startup.
    ///
    /// Without this, every aircraft still overhead after a restart would log
    /// a duplicate arrival. Recovered sessions carry their original
    /// `last_seen`, so ordinary eviction disposes of the ones that left
    /// while the service was down.
    pub async fn recover_recent(&self, now: i64) -> sqlx::Result<usize> {
        let since = now - self.config.recovery_window;
        let visits = crate::db::recent_visits(&self.pool, since).await?;
        let count = visits.len();

        let mut sessions = self.sessions.write();
        for (hex, registration, last_seen) in visits {
            let hex = hex.to_uppercase();
            let registration = registration.or_else(|| self.cache.get_cached(&hex));
            sessions.insert(
                hex,
                Session {
                    registration,
                    rssi: None,
                    lat: None,
                    lon: None,
                    track: None,
                    last_seen,
                },
            );
        }

        if count > 0 {
            info!(count, "Recovered recent sessions from event log");
        }
        Ok(count)
    }

    /// Run one poll cycle: fetch a snapshot, apply it, then evict.
    ///
    /// A failed fetch leaves all state untouched - in particular no eviction
    /// runs, so a flaky receiver cannot terminate sessions.
    pub async fn poll_once(&self, now: i64) {
        let batch = match self.source.fetch().await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(error = %e, "Snapshot fetch failed, skipping cycle");
                return;
            }
        };

        let mut seen: HashSet<String> = HashSet::with_capacity(batch.len());
        for obs in &batch {
            let hex = obs.hex.to_uppercase();
            seen.insert(hex.clone());

            let registration = obs
                .registration
                .clone()
                .or_else(|| self.cache.get_cached(&hex));
            let arrival = {
                let mut sessions = self.sessions.write();
                match sessions.get_mut(&hex) {
                    Some(session) => {
                        session.update(obs, registration, now);
                        None
                    }
                    None => {
                        let session = Session::from_observation(obs, registration, now);
                        let unresolved = session.registration.is_none();
                        let event = VisitEvent {
                            observed_at: now,
                            hex: hex.clone(),
                            registration: session.registration.clone(),
                            rssi: obs.rssi,
                            lat: obs.lat,
                            lon: obs.lon,
                        };
                        sessions.insert(hex.clone(), session);
                        Some((event, unresolved))
                    }
                }
            };

            if let Some((event, unresolved)) = arrival {
                info!(
                    hex = %event.hex,
                    registration = event.registration.as_deref().unwrap_or("?"),
                    "Aircraft arrived"
                );
                // A lost event is better than a stuck poll loop
                if let Err(e) = crate::db::insert_visit_event(&self.pool, &event).await {
                    warn!(hex = %event.hex, error = %e, "Failed to record visit event");
                }
                if unresolved {
                    self.spawn_lookup(hex, false);
                }
            }
        }

        self.evict_stale(now, &seen);
    }

    /// Drop sessions absent from the current batch for longer than the
    /// eviction window. An aircraft seen exactly at the boundary stays.
    fn evict_stale(&self, now: i64, seen: &HashSet<String>) {
        let mut sessions = self.sessions.write();
        sessions.retain(|hex, session| {
            if seen.contains(hex) || now - session.last_seen <= self.config.eviction_window {
                true
            } else {
                debug!(hex = %hex, last_seen = session.last_seen, "Session evicted");
                false
            }
        });
    }

    /// Retry lookups for live sessions that are still unresolved.
    ///
    /// Spawns at most `lookup_batch` tasks per pass, bypassing negative
    /// cache entries so an aircraft registered upstream since the last
    /// attempt can still resolve. Returns the number of tasks spawned.
    pub fn refresh_unresolved(&self) -> usize {
        let pending: Vec<String> = self
            .sessions
            .read()
            .iter()
            .filter(|(_, session)| session.registration.is_none())
            .map(|(hex, _)| hex.clone())
            .take(self.config.lookup_batch)
            .collect();

        if !pending.is_empty() {
            debug!(count = pending.len(), "Refreshing unresolved sessions");
        }
        let count = pending.len();
        for hex in pending {
            self.spawn_lookup(hex, true);
        }
        count
    }

    fn spawn_lookup(&self, hex: String, fresh: bool) {
        let sessions = self.sessions.clone();
        let cache = self.cache.clone();
        tokio::spawn(async move {
            resolve_and_apply(&sessions, &cache, &hex, fresh).await;
        });
    }

    /// Snapshot of all live sessions, unordered.
    pub fn live_sessions(&self) -> Vec<SessionSnapshot> {
        self.sessions
            .read()
            .iter()
            .map(|(hex, session)| SessionSnapshot {
                hex: hex.clone(),
                registration: session.registration.clone(),
                rssi: session.rssi,
                lat: session.lat,
                lon: session.lon,
                track: session.track,
                last_seen: session.last_seen,
            })
            .collect()
    }

    /// Number of live sessions without a registration.
    pub fn unresolved_count(&self) -> usize {
        self.sessions
            .read()
            .values()
            .filter(|s| s.registration.is_none())
            .count()
    }

    /// Poll and refresh forever, until Ctrl-C.
    pub async fn run(&self, poll_interval: Duration, refresh_interval: Duration) {
        if let Err(e) = self.recover_recent(Utc::now().timestamp()).await {
            warn!(error = %e, "Session recovery failed, starting cold");
        }

        let mut poll = tokio::time::interval(poll_interval);
        let mut refresh = tokio::time::interval(refresh_interval);
        // The first refresher tick fires immediately; that's harmless, there
        // is nothing unresolved yet.
        loop {
            tokio::select! {
                _ = poll.tick() => {
                    self.poll_once(Utc::now().timestamp()).await;
                }
                _ = refresh.tick() => {
                    self.refresh_unresolved();
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutting down");
                    break;
                }
            }
        }
    }
}

/// Resolve one identifier and apply the result to its live session, if any.
///
/// The session may have been evicted while the lookup was in flight; the
/// cache entry still sticks, so the next arrival starts resolved.
async fn resolve_and_apply(
    sessions: &RwLock<HashMap<String, Session>>,
    cache: &RegistryCache,
    hex: &str,
    fresh: bool,
) {
    let info = if fresh {
        cache.resolve_fresh(hex).await
    } else {
        cache.resolve(hex).await
    };

    if let Some(info) = info {
        if let Some(session) = sessions.write().get_mut(hex) {
            session.registration = Some(info.registration);
        }
    }
}
