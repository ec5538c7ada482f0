//! Snapshot feed Data Transfer Objects
//!
//! These types match EXACTLY what dump1090/readsb style receivers emit as
//! `aircraft.json`. DO NOT add fields that aren't in the wire format.
//! DO NOT use these types outside the feed module - convert to Observation
//! via the adapter.
//!
//! Different receiver builds disagree on field names, so both spellings of
//! each disputed field are modeled here and reconciled by the adapter:
//! - the aircraft array is `aircraft` (dump1090) or `ac` (adsbx style)
//! - the identifier is `hex` or `icao`
//! - the direction is `track` or `heading`

use serde::Deserialize;

/// Top-level snapshot document.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotDocument {
    /// Receiver timestamp, present in dump1090 output (unused)
    #[serde(default)]
    pub now: Option<f64>,
    /// Aircraft list, dump1090 spelling
    #[serde(default)]
    pub aircraft: Option<Vec<AircraftFrame>>,
    /// Aircraft list, adsbx spelling
    #[serde(default)]
    pub ac: Option<Vec<AircraftFrame>>,
}

/// One aircraft row in the snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AircraftFrame {
    /// ICAO 24-bit address as hex
    #[serde(default)]
    pub hex: Option<String>,
    /// Alternate spelling of the identifier
    #[serde(default)]
    pub icao: Option<String>,
    /// Callsign as broadcast (padded to 8 chars by some receivers)
    #[serde(default)]
    pub flight: Option<String>,
    /// Registration, when the feed has it
    #[serde(default)]
    pub reg: Option<String>,
    /// Signal strength in dBFS
    #[serde(default)]
    pub rssi: Option<f64>,
    /// Latitude in degrees
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude in degrees
    #[serde(default)]
    pub lon: Option<f64>,
    /// Track in degrees
    #[serde(default)]
    pub track: Option<f64>,
    /// Alternate spelling of track
    #[serde(default)]
    pub heading: Option<f64>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what real receivers emit.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Typical dump1090 aircraft.json document
    #[test]
    fn test_parse_dump1090_document() {
        let json = r#"{
            "now": 1700000000.5,
            "messages": 123456,
            "aircraft": [
                {
                    "hex": "a1b2c3",
                    "flight": "DAL895  ",
                    "alt_baro": 36000,
                    "lat": 40.6413,
                    "lon": -73.7781,
                    "track": 271.4,
                    "rssi": -21.3
                },
                {
                    "hex": "c0ffee",
                    "rssi": -33.1
                }
            ]
        }"#;

        let doc: SnapshotDocument = serde_json::from_str(json).expect("Should parse dump1090 doc");
        assert_eq!(doc.now, Some(1_700_000_000.5));

        let aircraft = doc.aircraft.expect("aircraft array");
        assert_eq!(aircraft.len(), 2);
        assert_eq!(aircraft[0].hex.as_deref(), Some("a1b2c3"));
        assert_eq!(aircraft[0].flight.as_deref(), Some("DAL895  "));
        assert_eq!(aircraft[0].track, Some(271.4));
        // Position-less aircraft still parse
        assert!(aircraft[1].lat.is_none());
    }

    /// adsbx style document: "ac" array, "icao" key, "heading"
    #[test]
    fn test_parse_adsbx_style_document() {
        let json = r#"{
            "ac": [
                {
                    "icao": "A1B2C3",
                    "reg": "N12345",
                    "heading": 90.0,
                    "lat": 40.0,
                    "lon": -74.0
                }
            ]
        }"#;

        let doc: SnapshotDocument = serde_json::from_str(json).expect("Should parse adsbx doc");
        assert!(doc.aircraft.is_none());

        let ac = doc.ac.expect("ac array");
        assert_eq!(ac[0].icao.as_deref(), Some("A1B2C3"));
        assert_eq!(ac[0].reg.as_deref(), Some("N12345"));
        assert_eq!(ac[0].heading, Some(90.0));
    }

    /// Empty and unknown fields must not break parsing
    #[test]
    fn test_parse_minimal_document() {
        let doc: SnapshotDocument = serde_json::from_str("{}").expect("Should parse empty doc");
        assert!(doc.aircraft.is_none());
        assert!(doc.ac.is_none());
    }
}
