//! Adapter layer: convert adsbdb DTOs to domain models
//!
//! This is the ONLY place where adsbdb DTO types are converted to domain
//! types. If adsbdb changes their response format, only this file and
//! dto.rs need to change.

use super::dto;
use crate::model::AircraftInfo;

/// Convert an adsbdb response body into an [`AircraftInfo`], if it carries
/// a usable registration.
///
/// `registration` is preferred over the legacy `regid` field; a record with
/// neither is treated as not found.
pub fn to_aircraft_info(body: dto::ResponseBody) -> Option<AircraftInfo> {
    let dto::ResponseBody::Found(wrapper) = body else {
        return None;
    };
    let aircraft = wrapper.aircraft;

    let registration = aircraft
        .registration
        .or(aircraft.regid)
        .map(|r| r.trim().to_uppercase())
        .filter(|r| !r.is_empty())?;

    Some(AircraftInfo {
        registration,
        aircraft_type: aircraft.aircraft_type,
        manufacturer: aircraft.manufacturer,
        icao_type: aircraft.icao_type,
    })
}
