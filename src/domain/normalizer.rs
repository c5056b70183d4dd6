//! Mapping of upstream payloads onto canonical records.
//!
//! Malformed data never aborts a batch: a payload of the wrong shape yields an
//! empty result, an unreadable row is skipped and an unparseable field becomes
//! absent for that record only.

use serde_json::Value;
use tracing::{debug, warn};

use super::dedup::{dedupe, dedupe_by, record_name};
use super::entities::{
    CanonicalPlanet, HostStar, NearEarthObject, PlanetCatalog, RawExoplanetRecord,
};

/// Exoplanet Archive column names.
pub mod fields {
    pub const NAME: &str = "pl_name";
    pub const HOST_STAR: &str = "hostname";
    pub const ORBITAL_PERIOD: &str = "pl_orbper";
    pub const RADIUS: &str = "pl_rade";
    pub const MASS: &str = "pl_bmasse";
    pub const DISCOVERY_METHOD: &str = "discoverymethod";
    pub const DISCOVERY_YEAR: &str = "disc_year";
    pub const STAR_MASS: &str = "st_mass";
    pub const STAR_RADIUS: &str = "st_rad";
    pub const STAR_TEMPERATURE: &str = "st_teff";

    /// Columns requested from the archive, in query order.
    pub const ALL: [&str; 10] = [
        NAME,
        HOST_STAR,
        ORBITAL_PERIOD,
        RADIUS,
        MASS,
        STAR_MASS,
        STAR_RADIUS,
        STAR_TEMPERATURE,
        DISCOVERY_METHOD,
        DISCOVERY_YEAR,
    ];
}

/// Splits an archive payload into raw rows.
///
/// A payload that is not a JSON array is malformed: it is logged and treated
/// as empty. Array elements that are not objects are skipped.
pub fn records_from_payload(payload: Value) -> Vec<RawExoplanetRecord> {
    let Value::Array(items) = payload else {
        warn!(
            kind = value_kind(&payload),
            "Malformed upstream data: expected an array of planet rows"
        );
        return Vec::new();
    };

    let total = items.len();
    let records: Vec<RawExoplanetRecord> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            other => {
                warn!(kind = value_kind(&other), "Skipping non-object planet row");
                None
            }
        })
        .collect();

    debug!("Decoded {} of {} upstream rows", records.len(), total);
    records
}

/// Normalizes a single raw row. Returns `None` when the row has no usable name.
pub fn normalize_record(record: &RawExoplanetRecord) -> Option<CanonicalPlanet> {
    let name = record_name(record)?.to_string();

    Some(CanonicalPlanet::new(
        name,
        text(record.get(fields::HOST_STAR)),
        real(record.get(fields::ORBITAL_PERIOD)),
        real(record.get(fields::RADIUS)),
        real(record.get(fields::MASS)),
        text(record.get(fields::DISCOVERY_METHOD)),
        year(record.get(fields::DISCOVERY_YEAR)),
    ))
}

/// Normalizes rows in order, skipping rows without identity.
pub fn normalize(records: &[RawExoplanetRecord]) -> Vec<CanonicalPlanet> {
    records.iter().filter_map(normalize_record).collect()
}

/// Extracts distinct host stars, first-seen by host name.
pub fn extract_host_stars(records: &[RawExoplanetRecord]) -> Vec<HostStar> {
    let stars = records.iter().filter_map(|record| {
        Some(HostStar {
            name: text(record.get(fields::HOST_STAR))?,
            mass_solar: real(record.get(fields::STAR_MASS)),
            radius_solar: real(record.get(fields::STAR_RADIUS)),
            temperature_k: real(record.get(fields::STAR_TEMPERATURE)),
        })
    });
    dedupe_by(stars, |star| Some(star.name.clone()))
}

/// Runs the full pipeline over an archive payload: decode, dedupe, normalize.
pub fn build_catalog(payload: Value) -> PlanetCatalog {
    let records = dedupe(records_from_payload(payload));
    PlanetCatalog {
        planets: normalize(&records),
        host_stars: extract_host_stars(&records),
    }
}

/// Flattens a NeoWs feed payload into near-Earth objects.
///
/// Days are visited in date order. Objects without a name are skipped; a feed
/// without a `near_earth_objects` map yields nothing.
pub fn normalize_neo_feed(payload: &Value) -> Vec<NearEarthObject> {
    let Some(days) = payload.get("near_earth_objects").and_then(Value::as_object) else {
        warn!("Malformed upstream data: NEO feed has no near_earth_objects map");
        return Vec::new();
    };

    let mut dates: Vec<&String> = days.keys().collect();
    dates.sort();

    let mut objects = Vec::new();
    for date in dates {
        let Some(entries) = days[date.as_str()].as_array() else {
            warn!(date = %date, "Malformed upstream data: NEO day is not a list");
            continue;
        };
        objects.extend(entries.iter().filter_map(|entry| neo_from_entry(entry, date)));
    }
    objects
}

fn neo_from_entry(entry: &Value, feed_date: &str) -> Option<NearEarthObject> {
    let name = text(entry.get("name"))?;

    let hazardous = entry
        .get("is_potentially_hazardous_asteroid")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let diameter_meters = real(entry.pointer("/estimated_diameter/meters/estimated_diameter_max"));

    let close_approach_date = entry
        .pointer("/close_approach_data/0/close_approach_date")
        .and_then(Value::as_str)
        .unwrap_or(feed_date)
        .to_string();

    Some(NearEarthObject {
        name,
        hazardous,
        diameter_meters,
        close_approach_date,
    })
}

/// Reads a non-negative finite real from a number or numeric string.
pub(crate) fn real(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    non_negative(parsed)
}

/// Discards negative and non-finite measurements.
pub(crate) fn non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn year(value: Option<&Value>) -> Option<i32> {
    let whole = match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    whole.and_then(|y| i32::try_from(y).ok())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
