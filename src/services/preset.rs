//! Default query start time.
//!
//! The time selector of the room search is preset to a sensible start
//! time: outside the university's opening hours the preset skips forward
//! to the next time the building opens.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::config::OpeningHours;

/// Get a suitable preset for the time selector, based on the local wall
/// clock and the default opening hours.
pub fn next_valid_date_now() -> NaiveDateTime {
    next_valid_date(chrono::Local::now().naive_local())
}

/// Get a suitable preset for the time selector.
///
/// On Sundays and after closing time the preset moves to opening time the
/// following day; before opening time it moves to opening time the same
/// day; during opening hours `now` is returned unchanged. Seconds are
/// preserved when the preset is applied.
pub fn next_valid_date(now: NaiveDateTime) -> NaiveDateTime {
    next_valid_date_with(&OpeningHours::default(), now)
}

/// [`next_valid_date`] with an explicit opening-hours policy.
pub fn next_valid_date_with(hours: &OpeningHours, now: NaiveDateTime) -> NaiveDateTime {
    if now.weekday() == Weekday::Sun || now.hour() > hours.close_hour {
        let next_day = now.date().succ_opt().unwrap_or_else(|| now.date());
        next_day.and_time(preset_time(hours, now))
    } else if now.hour() < hours.open_hour {
        now.date().and_time(preset_time(hours, now))
    } else {
        now
    }
}

fn preset_time(hours: &OpeningHours, now: NaiveDateTime) -> chrono::NaiveTime {
    now.time()
        .with_hour(hours.open_hour)
        .and_then(|t| t.with_minute(hours.preset_minute))
        .unwrap_or_else(|| now.time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_sunday_evening_skips_to_monday_opening() {
        // 2023-05-07 is a Sunday
        let preset = next_valid_date(at(2023, 5, 7, 22, 0));
        assert_eq!(preset, at(2023, 5, 8, 8, 15));
    }

    #[test]
    fn test_sunday_morning_also_skips_to_monday() {
        let preset = next_valid_date(at(2023, 5, 7, 10, 0));
        assert_eq!(preset, at(2023, 5, 8, 8, 15));
    }

    #[test]
    fn test_late_weekday_evening_skips_to_next_day() {
        // Tuesday 21:30
        let preset = next_valid_date(at(2023, 5, 2, 21, 30));
        assert_eq!(preset, at(2023, 5, 3, 8, 15));
    }

    #[test]
    fn test_hour_twenty_is_still_today() {
        // 20:xx is within opening hours, only 21:00 and later skips
        let now = at(2023, 5, 2, 20, 59);
        assert_eq!(next_valid_date(now), now);
    }

    #[test]
    fn test_early_morning_moves_to_opening_time() {
        let preset = next_valid_date(at(2023, 5, 2, 5, 30));
        assert_eq!(preset, at(2023, 5, 2, 8, 15));
    }

    #[test]
    fn test_working_hours_are_unchanged() {
        let now = at(2023, 5, 2, 10, 0);
        assert_eq!(next_valid_date(now), now);
    }

    #[test]
    fn test_seconds_are_preserved() {
        let now = NaiveDate::from_ymd_opt(2023, 5, 2)
            .unwrap()
            .and_hms_opt(5, 30, 42)
            .unwrap();
        let preset = next_valid_date(now);
        assert_eq!(preset.second(), 42);
        assert_eq!(preset.hour(), 8);
        assert_eq!(preset.minute(), 15);
    }

    #[test]
    fn test_custom_opening_hours() {
        let hours = OpeningHours {
            open_hour: 9,
            preset_minute: 0,
            close_hour: 18,
        };
        let preset = next_valid_date_with(&hours, at(2023, 5, 2, 19, 30));
        assert_eq!(preset, at(2023, 5, 3, 9, 0));
    }
}
