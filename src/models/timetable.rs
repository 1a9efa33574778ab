//! Raw timetable wire types.
//!
//! These structs mirror the upstream timetable JSON one-to-one. The field
//! names on the wire are German (`datum`, `raumtyp`, `stunden`, ...); they
//! are mapped to English identifiers via serde renames. The structs are
//! read-only inputs to the openings computation and never constructed by
//! this crate outside of deserialization and tests.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One calendar day of the room timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableDay {
    /// Calendar day in ISO form (`YYYY-MM-DD`).
    #[serde(rename = "datum")]
    pub date: String,
    /// Lecture entries grouped by room type.
    #[serde(rename = "rtypes", default)]
    pub room_types: Vec<RoomTypeGroup>,
}

/// All hour slots of one room type on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeGroup {
    /// Room type label, e.g. `"Hörsaal"`.
    #[serde(rename = "raumtyp")]
    pub room_type: String,
    /// Hour slots keyed by slot identifier. A `BTreeMap` keeps the
    /// expansion order deterministic across runs.
    #[serde(rename = "stunden", default)]
    pub hours: BTreeMap<String, HourSlot>,
}

/// A single hour slot: a time range and the rooms free during it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourSlot {
    /// Start of the slot as local wall-clock time (`HH:MM`).
    #[serde(rename = "von")]
    pub from: String,
    /// End of the slot as local wall-clock time (`HH:MM`).
    #[serde(rename = "bis")]
    pub until: String,
    /// Comma-separated list of room names, e.g. `"G215, G305"`.
    #[serde(rename = "raeume")]
    pub rooms: String,
}

/// Separator between room names in [`HourSlot::rooms`].
pub const ROOM_LIST_SEPARATOR: &str = ", ";

/// Parse a wall-clock time string from the timetable.
///
/// The upstream API emits `HH:MM`; some deployments append seconds, so
/// `HH:MM:SS` is accepted as well.
pub fn parse_local_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}
