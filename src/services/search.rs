//! Point-in-time-window room search.
//!
//! Given a begin/end window and an optional building restriction, this
//! module fetches the day's raw timetable, computes the room openings and
//! returns the rooms whose opening fully contains the window, sorted by
//! room name. Nothing is cached between calls: timetables can change
//! intraday, so every query re-fetches and re-merges.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::debug;
use std::cmp::Ordering;

use crate::models::rooms::CandidateRoom;
pub use crate::models::rooms::BuildingFilter;
use crate::models::timetable::parse_local_time;
use crate::services::openings::compute_openings;
use crate::source::{SourceError, TimetableSource};

/// Default minimum opening duration for a search (`HH:MM`).
pub const DEFAULT_DURATION: &str = "01:00";

/// Error type for the search boundary.
///
/// Source failures pass through unchanged; the remaining variants reject
/// malformed caller input before any fetch happens.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The timetable fetch failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The date/time strings did not parse.
    #[error("Invalid date/time '{0}', expected 'YYYY-MM-DD' and 'HH:MM'")]
    InvalidDateTime(String),

    /// The duration string did not parse.
    #[error("Invalid duration '{0}', expected 'HH:MM'")]
    InvalidDuration(String),
}

/// Search free rooms starting at `date`/`time` for at least `duration`.
///
/// Thin parsing wrapper over [`search_rooms`]: `date` (`YYYY-MM-DD`) and
/// `time` (`HH:MM`) form the begin of the window, `duration` (`HH:MM`) is
/// added to form the end.
///
/// # Arguments
/// * `source` - Timetable source to fetch from
/// * `date` - Start date as an ISO string
/// * `time` - Start time
/// * `building` - Building restriction
/// * `duration` - Minimum opening duration
pub async fn filter_rooms(
    source: &dyn TimetableSource,
    date: &str,
    time: &str,
    building: &BuildingFilter,
    duration: &str,
) -> Result<Vec<CandidateRoom>, SearchError> {
    let begin = parse_begin(date, time)?;
    let end = begin + parse_duration(duration)?;
    search_rooms(source, begin, end, building).await
}

/// Search rooms that are free for the whole `begin..end` window.
///
/// # Arguments
/// * `source` - Timetable source to fetch from
/// * `begin` - Start of the window
/// * `end` - End of the window
/// * `building` - Building restriction
///
/// # Returns
/// * `Ok(Vec<CandidateRoom>)` - Matching rooms, sorted by room name.
///   Openings of one room are disjoint, so a room appears at most once.
/// * `Err(SearchError)` - If the fetch fails
pub async fn search_rooms(
    source: &dyn TimetableSource,
    begin: NaiveDateTime,
    end: NaiveDateTime,
    building: &BuildingFilter,
) -> Result<Vec<CandidateRoom>, SearchError> {
    let days = source.fetch_day(begin.date()).await?;
    let openings = compute_openings(&days, begin.date());
    debug!(
        "Computed openings for {} rooms on {}",
        openings.len(),
        begin.date()
    );

    let mut candidates: Vec<CandidateRoom> = openings
        .iter()
        .flat_map(|(room, list)| {
            list.iter()
                .map(move |opening| CandidateRoom::from_opening(room.clone(), opening))
        })
        .filter(|candidate| {
            building.matches(&candidate.room)
                && begin >= candidate.from
                && end <= candidate.until
        })
        .collect();

    candidates.sort_by(|a, b| room_name_cmp(&a.room, &b.room));
    Ok(candidates)
}

/// Room name ordering used for search results.
///
/// Room codes are short ASCII strings, so a case-insensitive lexicographic
/// comparison with a case-sensitive tie-break stands in for full locale
/// collation.
pub fn room_name_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

fn parse_begin(date: &str, time: &str) -> Result<NaiveDateTime, SearchError> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| SearchError::InvalidDateTime(format!("{}T{}", date, time)))?;
    let tod = parse_local_time(time)
        .ok_or_else(|| SearchError::InvalidDateTime(format!("{}T{}", date, time)))?;
    Ok(day.and_time(tod))
}

fn parse_duration(duration: &str) -> Result<Duration, SearchError> {
    let invalid = || SearchError::InvalidDuration(duration.to_string());
    let (hours, minutes) = duration.split_once(':').ok_or_else(invalid)?;
    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
    Ok(Duration::hours(hours) + Duration::minutes(minutes))
}
