//! Static pairwise room-distance table.
//!
//! Distances between rooms were measured once over the campus floor plans
//! and shipped with the crate as JSON. The table maps uppercase room names
//! to their neighbors' distances; the unit is opaque, only the relative
//! ordering matters for ranking. Floor differences are not modeled.
//!
//! The table is loaded once per process and never mutated.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

/// Pairwise room distances, keyed by uppercase room name on both levels.
pub type DistanceTable = HashMap<String, HashMap<String, f64>>;

static EMBEDDED_TABLE: &str = include_str!("../data/room-distances.json");

static DISTANCES: Lazy<DistanceTable> = Lazy::new(|| {
    parse_distance_table(EMBEDDED_TABLE).unwrap_or_else(|e| {
        log::error!("Embedded distance table is invalid: {:#}", e);
        DistanceTable::new()
    })
});

static NO_DISTANCES: Lazy<HashMap<String, f64>> = Lazy::new(HashMap::new);

/// Returns the distances from the given room to its neighbors.
///
/// The lookup is case-insensitive in `room`. Empty and unknown rooms
/// yield an empty map, never an error.
pub fn room_distances(room: &str) -> &'static HashMap<String, f64> {
    if room.is_empty() {
        return &NO_DISTANCES;
    }
    DISTANCES
        .get(&room.to_uppercase())
        .unwrap_or(&NO_DISTANCES)
}

/// Parse a distance table from JSON.
pub fn parse_distance_table(json_str: &str) -> Result<DistanceTable> {
    serde_json::from_str(json_str).context("Invalid distance table JSON")
}

/// Load a distance table from an external JSON file, for deployments that
/// override the embedded one (see [`crate::config::DistanceSettings`]).
pub fn load_distance_table<P: AsRef<Path>>(path: P) -> Result<DistanceTable> {
    let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
        format!(
            "Failed to read distance table: {}",
            path.as_ref().display()
        )
    })?;
    parse_distance_table(&content)
}
