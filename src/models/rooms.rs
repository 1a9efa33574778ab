//! Domain types for room openings and search results.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A maximal contiguous interval during which a room is free.
///
/// Openings are produced by the merge in [`crate::services::openings`].
/// Within one room's opening list no two openings overlap, and no two lie
/// within the merge tolerance of each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    /// Room type of the first slot folded into this opening. The type is
    /// not recomputed when later slots extend the interval.
    #[serde(rename = "type")]
    pub room_type: String,
    pub from: NaiveDateTime,
    pub until: NaiveDateTime,
}

/// Per-room opening lists for one calendar day, keyed by room name as given
/// by the source data (case preserved). Built fresh per query and never
/// shared across calls.
pub type RoomOpenings = HashMap<String, Vec<Opening>>;

/// One matched opening of one room, as returned by a search.
///
/// Serializes as `{ room, type, from, until }` so result lists can be
/// handed to an embedding API layer unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRoom {
    pub room: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub from: NaiveDateTime,
    pub until: NaiveDateTime,
}

impl CandidateRoom {
    /// Build a candidate from a room name and one of its openings.
    pub fn from_opening(room: impl Into<String>, opening: &Opening) -> Self {
        Self {
            room: room.into(),
            room_type: opening.room_type.clone(),
            from: opening.from,
            until: opening.until,
        }
    }
}

/// Building restriction for a room search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BuildingFilter {
    /// Match rooms in any building.
    #[default]
    All,
    /// Match only rooms of one building, identified by its letter code
    /// (e.g. `"G"` matches `G215` but not `H101`).
    Building(String),
}

impl BuildingFilter {
    /// Whether `room` passes this filter.
    pub fn matches(&self, room: &str) -> bool {
        match self {
            BuildingFilter::All => true,
            BuildingFilter::Building(code) => is_in_building(room, code),
        }
    }
}

/// Checks whether a room belongs to a building.
///
/// A room belongs to building `code` when its name is the building code
/// followed by a plain room number, compared case-insensitively
/// (`G215` is in `G`, `H101` is not).
pub fn is_in_building(room: &str, code: &str) -> bool {
    if code.is_empty() || room.len() <= code.len() {
        return false;
    }
    let (prefix, number) = room.split_at(code.len());
    prefix.eq_ignore_ascii_case(code) && number.chars().all(|c| c.is_ascii_digit())
}
