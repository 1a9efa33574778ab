//! Suggested-room ranking.
//!
//! When a lecture's room is taken, the app suggests nearby free rooms.
//! This module searches all buildings for the requested window, drops rooms
//! on the other campus and orders the rest by walking distance to the
//! reference room, using the static distance table.

use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::distances::room_distances;
use crate::models::rooms::{BuildingFilter, CandidateRoom};
use crate::services::search::{search_rooms, SearchError};
use crate::source::TimetableSource;

/// Find free rooms close to `reference_room` during `begin..end`.
///
/// Rooms on the other campus than the reference room are excluded; the
/// remaining candidates are ordered by distance-table lookup, closest
/// first. Rooms with no recorded distance rank last, keeping their
/// room-name order from the search.
pub async fn find_suggested_rooms(
    source: &dyn TimetableSource,
    reference_room: &str,
    begin: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<CandidateRoom>, SearchError> {
    let mut rooms = search_rooms(source, begin, end, &BuildingFilter::All).await?;

    rooms.retain(|candidate| same_campus(&candidate.room, reference_room));

    rank_by_distance(&mut rooms, room_distances(reference_room));
    Ok(rooms)
}

/// Checks whether two rooms are on the same campus.
///
/// Any room name containing `'N'` belongs to the Neuburg campus; a
/// suggestion only makes sense when both rooms are on the same side.
pub fn same_campus(a: &str, b: &str) -> bool {
    a.contains('N') == b.contains('N')
}

/// Stable-sort candidates by their distance to the reference room.
///
/// `distances` maps neighbor room names to a distance value; candidates
/// without an entry sort as infinitely far away. Floor differences are not
/// part of the table and are ignored.
pub fn rank_by_distance(rooms: &mut [CandidateRoom], distances: &HashMap<String, f64>) {
    rooms.sort_by(|a, b| {
        let da = distances.get(&a.room).copied().unwrap_or(f64::INFINITY);
        let db = distances.get(&b.room).copied().unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
}
