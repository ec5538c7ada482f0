//! adsbdb API Data Transfer Objects
//!
//! These types match EXACTLY what the adsbdb API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the adsbdb module - convert to domain
//! types via the adapter.
//!
//! We use the `/v0/aircraft/{mode_s}` endpoint. A known aircraft comes back
//! as a nested `response.aircraft` object; an unknown one as the string
//! `"unknown aircraft"` (with a 404 status).

use serde::Deserialize;

/// Top-level lookup response.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    pub response: ResponseBody,
}

/// The response body is either the aircraft wrapper or a plain message.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Found(AircraftWrapper),
    Message(String),
}

/// Wrapper object around the aircraft record.
#[derive(Debug, Clone, Deserialize)]
pub struct AircraftWrapper {
    pub aircraft: AircraftDto,
}

/// Aircraft record as returned by adsbdb.
#[derive(Debug, Clone, Deserialize)]
pub struct AircraftDto {
    /// Registration (tail number)
    #[serde(default)]
    pub registration: Option<String>,
    /// Legacy registration field on some records
    #[serde(default)]
    pub regid: Option<String>,
    /// Free-text model string (e.g., "737-8H4")
    #[serde(rename = "type", default)]
    pub aircraft_type: Option<String>,
    /// Free-text manufacturer string
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// ICAO type designator (e.g., "B738")
    #[serde(default)]
    pub icao_type: Option<String>,
    /// Mode S hex address
    #[serde(default)]
    pub mode_s: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_known_aircraft() {
        let json = r#"{
            "response": {
                "aircraft": {
                    "type": "737-8H4",
                    "icao_type": "B738",
                    "manufacturer": "THE BOEING COMPANY",
                    "mode_s": "A1B2C3",
                    "registration": "N12345",
                    "registered_owner_country_iso_name": "US",
                    "registered_owner": "Southwest Airlines"
                }
            }
        }"#;

        let parsed: LookupResponse = serde_json::from_str(json).expect("Should parse aircraft");
        let ResponseBody::Found(wrapper) = parsed.response else {
            panic!("expected aircraft body");
        };
        assert_eq!(wrapper.aircraft.registration.as_deref(), Some("N12345"));
        assert_eq!(wrapper.aircraft.aircraft_type.as_deref(), Some("737-8H4"));
        assert_eq!(wrapper.aircraft.icao_type.as_deref(), Some("B738"));
        assert_eq!(
            wrapper.aircraft.manufacturer.as_deref(),
            Some("THE BOEING COMPANY")
        );
    }

    #[test]
    fn test_parse_unknown_aircraft() {
        let json = r#"{"response": "unknown aircraft"}"#;

        let parsed: LookupResponse = serde_json::from_str(json).expect("Should parse message");
        let ResponseBody::Message(msg) = parsed.response else {
            panic!("expected message body");
        };
        assert_eq!(msg, "unknown aircraft");
    }

    #[test]
    fn test_parse_sparse_record() {
        // Registration only, everything else absent
        let json = r#"{"response": {"aircraft": {"regid": "N54321"}}}"#;

        let parsed: LookupResponse = serde_json::from_str(json).expect("Should parse sparse record");
        let ResponseBody::Found(wrapper) = parsed.response else {
            panic!("expected aircraft body");
        };
        assert_eq!(wrapper.aircraft.regid.as_deref(), Some("N54321"));
        assert!(wrapper.aircraft.registration.is_none());
        assert!(wrapper.aircraft.aircraft_type.is_none());
    }
}
