//! JSON parser for the raw room timetable.

use anyhow::{Context, Result};

use crate::models::timetable::TimetableDay;

/// Parse a timetable payload into day records.
///
/// Accepts either a bare array of day records or the upstream envelope
/// `{ "rooms": [...] }`. Deserialization failures report the JSON path of
/// the field that did not match.
///
/// # Arguments
/// * `json_str` - The raw JSON payload
///
/// # Returns
/// * `Ok(Vec<TimetableDay>)` - The parsed day records
/// * `Err(anyhow::Error)` - If the payload is not valid timetable JSON
pub fn parse_timetable_json(json_str: &str) -> Result<Vec<TimetableDay>> {
    let value: serde_json::Value =
        serde_json::from_str(json_str).context("Invalid JSON syntax in timetable payload")?;

    // The REST API wraps the day records in a "rooms" envelope; fixtures
    // and tests often pass the bare array.
    let records = match value {
        serde_json::Value::Object(mut map) => map
            .remove("rooms")
            .context("Timetable object must contain a 'rooms' key")?,
        other => other,
    };

    deserialize_days(records)
}

fn deserialize_days(records: serde_json::Value) -> Result<Vec<TimetableDay>> {
    serde_path_to_error::deserialize(records).map_err(|e| {
        let path = e.path().to_string();
        anyhow::anyhow!("Timetable deserialization error at '{}': {}", path, e.inner())
    })
}
