//! Room opening computation.
//!
//! The raw timetable lists, per day and room type, which rooms are free
//! during which hour slots. Adjacent slots rarely line up to the exact
//! minute, so taking them as-is produces a fragmented picture. This module
//! folds the slots of one day into per-room lists of contiguous openings,
//! absorbing gaps of up to [`GAP_TOLERANCE_MINUTES`] minutes.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::warn;

use crate::models::rooms::{Opening, RoomOpenings};
use crate::models::timetable::{parse_local_time, TimetableDay, ROOM_LIST_SEPARATOR};

/// Gaps of up to this many minutes between two slots of the same room are
/// ignored when merging, since the source time slots don't line up
/// perfectly.
pub const GAP_TOLERANCE_MINUTES: i64 = 15;

/// One normalized availability unit, produced while expanding the raw
/// timetable and consumed immediately by the fold.
#[derive(Debug, Clone)]
struct Slot<'a> {
    room: &'a str,
    room_type: &'a str,
    from: NaiveDateTime,
    until: NaiveDateTime,
}

/// Compute the per-room openings for one calendar day.
///
/// Day records whose date does not match `date` are skipped. Each matching
/// record is expanded into one slot per (room, hour slot) combination, and
/// the slots are folded into per-room opening lists: a slot extends the
/// first existing opening it overlaps (with tolerance), otherwise it starts
/// a new opening. An opening keeps the room type of the first slot that
/// created it.
///
/// Malformed records (unparseable times, empty room lists) contribute no
/// slots and are not an error.
pub fn compute_openings(days: &[TimetableDay], date: NaiveDate) -> RoomOpenings {
    let date_str = date.format("%Y-%m-%d").to_string();
    let mut openings = RoomOpenings::new();

    for day in days.iter().filter(|day| day.date == date_str) {
        for group in &day.room_types {
            for slot_record in group.hours.values() {
                let (from, until) = match (
                    parse_local_time(&slot_record.from),
                    parse_local_time(&slot_record.until),
                ) {
                    (Some(from), Some(until)) => (date.and_time(from), date.and_time(until)),
                    _ => {
                        warn!(
                            "Skipping hour slot with unparseable times '{}'-'{}'",
                            slot_record.from, slot_record.until
                        );
                        continue;
                    }
                };

                for room in slot_record
                    .rooms
                    .split(ROOM_LIST_SEPARATOR)
                    .map(str::trim)
                    .filter(|room| !room.is_empty())
                {
                    fold_slot(
                        &mut openings,
                        Slot {
                            room,
                            room_type: &group.room_type,
                            from,
                            until,
                        },
                    );
                }
            }
        }
    }

    openings
}

/// Fold one slot into the opening list of its room.
fn fold_slot(openings: &mut RoomOpenings, slot: Slot<'_>) {
    let tolerance = Duration::minutes(GAP_TOLERANCE_MINUTES);
    let room_openings = openings.entry(slot.room.to_string()).or_default();

    let overlapping = room_openings
        .iter_mut()
        .find(|o| slot.from <= o.until + tolerance && slot.until >= o.from - tolerance);

    match overlapping {
        Some(opening) => {
            opening.from = opening.from.min(slot.from);
            opening.until = opening.until.max(slot.until);
        }
        None => room_openings.push(Opening {
            room_type: slot.room_type.to_string(),
            from: slot.from,
            until: slot.until,
        }),
    }
}
