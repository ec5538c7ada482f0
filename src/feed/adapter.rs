//! Adapter layer: convert snapshot DTOs to domain observations.
//!
//! This is the ONLY place where feed wire shapes are converted to
//! [`Observation`]s, so receiver format quirks stay contained here.

use super::dto;
use crate::model::Observation;

/// Minimum length for a registration/callsign to be considered real.
/// Anything shorter is garbage from partial decodes.
const MIN_REGISTRATION_LEN: usize = 2;

/// Convert a snapshot document into observations.
///
/// Rows without an identifier are dropped. Identifiers are uppercased;
/// registrations come from `reg` first, then the broadcast callsign.
pub fn to_observations(doc: dto::SnapshotDocument) -> Vec<Observation> {
    let frames = doc.aircraft.or(doc.ac).unwrap_or_default();

    frames
        .into_iter()
        .filter_map(|frame| {
            let hex = frame.hex.as_deref().or(frame.icao.as_deref())?;
            let hex = hex.trim();
            if hex.is_empty() {
                return None;
            }

            let registration = normalize_registration(frame.reg.as_deref())
                .or_else(|| normalize_registration(frame.flight.as_deref()));

            Some(Observation {
                hex: hex.to_uppercase(),
                registration,
                rssi: frame.rssi,
                lat: frame.lat,
                lon: frame.lon,
                track: frame.track.or(frame.heading),
            })
        })
        .collect()
}

/// Extract and normalize a registration/callsign field.
///
/// Trims receiver padding, uppercases, and rejects strings too short to be
/// a real registration.
pub fn normalize_registration(reg: Option<&str>) -> Option<String> {
    let s = reg?.trim().to_uppercase();
    if s.len() >= MIN_REGISTRATION_LEN {
        Some(s)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(hex: Option<&str>) -> dto::AircraftFrame {
        dto::AircraftFrame {
            hex: hex.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_registration() {
        assert_eq!(
            normalize_registration(Some("DAL895  ")).as_deref(),
            Some("DAL895")
        );
        assert_eq!(normalize_registration(Some("n12345")).as_deref(), Some("N12345"));
        // Too short after trimming
        assert_eq!(normalize_registration(Some(" 7 ")), None);
        assert_eq!(normalize_registration(Some("")), None);
        assert_eq!(normalize_registration(None), None);
    }

    #[test]
    fn test_hex_uppercased_and_missing_dropped() {
        let doc = dto::SnapshotDocument {
            now: None,
            aircraft: Some(vec![
                frame(Some("a1b2c3")),
                frame(None),
                frame(Some("  ")),
            ]),
            ac: None,
        };

        let obs = to_observations(doc);
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].hex, "A1B2C3");
    }

    #[test]
    fn test_reg_preferred_over_flight() {
        let mut f = frame(Some("a1b2c3"));
        f.reg = Some("N12345".to_string());
        f.flight = Some("DAL895".to_string());
        f.heading = Some(180.0);

        let doc = dto::SnapshotDocument {
            now: None,
            aircraft: None,
            ac: Some(vec![f]),
        };

        let obs = to_observations(doc);
        assert_eq!(obs[0].registration.as_deref(), Some("N12345"));
        // heading fills in when track is absent
        assert_eq!(obs[0].track, Some(180.0));
    }

    #[test]
    fn test_flight_fallback() {
        let mut f = frame(Some("a1b2c3"));
        f.flight = Some("DAL895  ".to_string());

        let doc = dto::SnapshotDocument {
            now: None,
            aircraft: Some(vec![f]),
            ac: None,
        };

        let obs = to_observations(doc);
        assert_eq!(obs[0].registration.as_deref(), Some("DAL895"));
    }
}
