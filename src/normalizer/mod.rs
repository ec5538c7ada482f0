//! Aircraft type normalization.
//!
//! Maps free-text manufacturer/model/ICAO-type strings onto canonical
//! display names ("Boeing 737-800", "Cessna 172 Skyhawk") so the same
//! airframe family groups together regardless of how the upstream database
//! punctuated it. Deliberately a deterministic ordered cascade rather than
//! fuzzy matching: cheap, auditable, and testable rule by rule.
//!
//! [`normalize`] never fails and always returns a non-empty string; the
//! sentinel `"Unknown"` is reserved for the case where all inputs are empty.

mod patterns;

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

use patterns::{AIRCRAFT_RULES, MANUFACTURER_ALIASES};

/// Sentinel returned when no input carries any information.
pub const UNKNOWN: &str = "Unknown";

/// Compiled form of the ordered rule table.
fn compiled_rules() -> &'static [(Regex, &'static str, Option<&'static str>)] {
    static RULES: OnceLock<Vec<(Regex, &'static str, Option<&'static str>)>> = OnceLock::new();
    RULES.get_or_init(|| {
        AIRCRAFT_RULES
            .iter()
            .map(|r| {
                let re = RegexBuilder::new(r.pattern)
                    .case_insensitive(true)
                    .build()
                    .unwrap_or_else(|e| panic!("invalid type rule {:?}: {e}", r.pattern));
                (re, r.canonical, r.manufacturer)
            })
            .collect()
    })
}

/// Normalize a raw manufacturer name to its canonical form.
///
/// Unknown manufacturers pass through trimmed as-is; empty input yields None.
pub fn normalize_manufacturer(manufacturer: Option<&str>) -> Option<String> {
    let raw = manufacturer?.trim();
    if raw.is_empty() {
        return None;
    }
    let key = raw.to_uppercase();
    for (alias, canonical) in MANUFACTURER_ALIASES {
        if *alias == key {
            return Some((*canonical).to_string());
        }
    }
    Some(raw.to_string())
}

/// Normalize an aircraft type to a canonical display name.
///
/// The match subject is `model` if non-empty, else `icao_type`. Rules are
/// evaluated strictly in order; the first match wins and its canonical name
/// is composed with the rule's manufacturer override (or the normalized raw
/// manufacturer when the rule has none). With no match, falls back to the
/// whitespace-collapsed raw inputs, and finally to [`UNKNOWN`].
pub fn normalize(
    manufacturer: Option<&str>,
    model: Option<&str>,
    icao_type: Option<&str>,
) -> String {
    let norm_mfr = normalize_manufacturer(manufacturer);

    let subject = model
        .filter(|s| !s.trim().is_empty())
        .or(icao_type)
        .unwrap_or("");

    if !subject.is_empty() {
        for (re, canonical, mfr_override) in compiled_rules() {
            if re.is_match(subject) {
                return match mfr_override.map(str::to_string).or_else(|| norm_mfr.clone()) {
                    Some(mfr) => format!("{mfr} {canonical}"),
                    None => (*canonical).to_string(),
                };
            }
        }
    }

    // No rule matched: return a cleaned-up composition of what we have.
    let clean_subject = collapse_whitespace(subject);
    match (norm_mfr, clean_subject.is_empty()) {
        (Some(mfr), false) => format!("{mfr} {clean_subject}"),
        (_, false) => clean_subject,
        (mfr, true) => match icao_type.map(str::trim).filter(|s| !s.is_empty()) {
            Some(icao) => match mfr {
                Some(m) => format!("{m} {icao}"),
                None => icao.to_string(),
            },
            None => mfr.unwrap_or_else(|| UNKNOWN.to_string()),
        },
    }
}

/// Normalize a pre-formatted display string (e.g. "BOEING 737-800").
///
/// Splits off the leading word as the manufacturer and re-normalizes. Used
/// by the registry maintenance command on entries that only carry a combined
/// string.
pub fn normalize_display(display: &str) -> String {
    let trimmed = display.trim();
    if trimmed.is_empty() || trimmed == UNKNOWN {
        return UNKNOWN.to_string();
    }
    match trimmed.split_once(char::is_whitespace) {
        Some((mfr, model)) => normalize(Some(mfr), Some(model), None),
        None => normalize(None, Some(trimmed), None),
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
