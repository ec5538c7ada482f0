//! Core data models for aircraft tracking.
//!
//! Defines the primary entities: [`Observation`], [`Session`],
//! [`VisitEvent`], [`RegistryEntry`], and [`AircraftInfo`].
//!
//! # Database Schema
//!
//! The persisted models map to the following tables:
//! - `events` - Append-only visit events, one per arrival into coverage
//! - `aircraft_registry` - hex -> registration/type enrichment records

use serde::Serialize;
use sqlx::FromRow;

/// A single parsed snapshot row from the receiver feed.
///
/// The hex identifier is always uppercased by the feed adapter; the
/// registration is only present when broadcast by the aircraft itself
/// (and at least two characters long).
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// ICAO 24-bit transponder address, uppercase hex
    pub hex: String,
    /// Broadcast registration or callsign, if any
    pub registration: Option<String>,
    /// Signal strength in dBFS
    pub rssi: Option<f64>,
    /// Latitude in degrees
    pub lat: Option<f64>,
    /// Longitude in degrees
    pub lon: Option<f64>,
    /// Track/heading in degrees
    pub track: Option<f64>,
}

/// In-memory record of one aircraft's continuous presence in coverage.
///
/// A session exists iff the aircraft has been observed within the eviction
/// window. All transient fields track the latest observation; the
/// registration is upgrade-only (a resolved value is never cleared by a
/// later observation without one).
#[derive(Debug, Clone)]
pub struct Session {
    /// Resolved or broadcast registration, once known
    pub registration: Option<String>,
    /// Last observed signal strength
    pub rssi: Option<f64>,
    /// Last known latitude
    pub lat: Option<f64>,
    /// Last known longitude
    pub lon: Option<f64>,
    /// Last known track in degrees
    pub track: Option<f64>,
    /// Epoch seconds of the most recent observation
    pub last_seen: i64,
}

/// Read-only view of a live session, for the dashboard layer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    /// ICAO hex identifier
    pub hex: String,
    /// Registration, if resolved
    pub registration: Option<String>,
    /// Last observed signal strength
    pub rssi: Option<f64>,
    /// Last known latitude
    pub lat: Option<f64>,
    /// Last known longitude
    pub lon: Option<f64>,
    /// Last known track in degrees
    pub track: Option<f64>,
    /// Epoch seconds of the most recent observation
    pub last_seen: i64,
}

/// Immutable record of one arrival into coverage.
///
/// Written once at session creation and never corrected, even if the
/// registration resolves after the fact.
#[derive(Debug, Clone, FromRow)]
pub struct VisitEvent {
    /// Epoch seconds when the aircraft was first observed
    pub observed_at: i64,
    /// ICAO hex identifier
    pub hex: String,
    /// Registration known at time of arrival, if any
    pub registration: Option<String>,
    /// Signal strength at arrival
    pub rssi: Option<f64>,
    /// Latitude at arrival
    pub lat: Option<f64>,
    /// Longitude at arrival
    pub lon: Option<f64>,
}

/// Persisted enrichment record for one hex identifier.
#[derive(Debug, Clone, FromRow)]
pub struct RegistryEntry {
    /// ICAO hex identifier (primary key)
    pub hex: String,
    /// Registration (tail number), uppercase
    pub registration: String,
    /// Raw aircraft type/model string from the lookup source
    pub aircraft_type: Option<String>,
    /// Raw manufacturer string from the lookup source
    pub manufacturer: Option<String>,
    /// ICAO type designator (e.g., "B738")
    pub icao_type: Option<String>,
    /// Cached canonical display name; None when normalization yields "Unknown"
    pub normalized_type: Option<String>,
    /// Epoch seconds of the last registry update
    pub last_updated: i64,
}

/// Aircraft identity data returned by the lookup service.
///
/// This is OUR type - lookup provider DTOs are converted into it by
/// their adapters and never escape their modules.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftInfo {
    /// Registration (tail number), uppercase
    pub registration: String,
    /// Raw aircraft type/model string
    pub aircraft_type: Option<String>,
    /// Raw manufacturer string
    pub manufacturer: Option<String>,
    /// ICAO type designator
    pub icao_type: Option<String>,
}

impl Session {
    /// Create a session from an arrival observation.
    pub fn from_observation(obs: &Observation, registration: Option<String>, now: i64) -> Self {
        Self {
            registration,
            rssi: obs.rssi,
            lat: obs.lat,
            lon: obs.lon,
            track: obs.track,
            last_seen: now,
        }
    }

    /// Apply a subsequent observation within the same session.
    ///
    /// Transient fields always take the latest values; the registration is
    /// only ever upgraded, never cleared.
    pub fn update(&mut self, obs: &Observation, registration: Option<String>, now: i64) {
        if let Some(reg) = registration {
            self.registration = Some(reg);
        }
        self.rssi = obs.rssi;
        self.lat = obs.lat;
        self.lon = obs.lon;
        self.track = obs.track;
        self.last_seen = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(hex: &str) -> Observation {
        Observation {
            hex: hex.to_string(),
            registration: None,
            rssi: Some(-12.5),
            lat: Some(40.0),
            lon: Some(-74.0),
            track: Some(270.0),
        }
    }

    #[test]
    fn test_session_update_keeps_registration() {
        let first = obs("A1B2C3");
        let mut session = Session::from_observation(&first, Some("N12345".to_string()), 100);

        let mut later = obs("A1B2C3");
        later.rssi = Some(-20.0);
        session.update(&later, None, 160);

        assert_eq!(session.registration.as_deref(), Some("N12345"));
        assert_eq!(session.rssi, Some(-20.0));
        assert_eq!(session.last_seen, 160);
    }

    #[test]
    fn test_session_update_upgrades_registration() {
        let first = obs("A1B2C3");
        let mut session = Session::from_observation(&first, None, 100);
        assert!(session.registration.is_none());

        session.update(&obs("A1B2C3"), Some("N54321".to_string()), 110);
        assert_eq!(session.registration.as_deref(), Some("N54321"));
    }
}
