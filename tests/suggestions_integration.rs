//! Integration tests for suggested-room ranking.

use chrono::{NaiveDate, NaiveDateTime};
use rooms_rust::services::suggestions::find_suggested_rooms;
use rooms_rust::source::LocalTimetable;

// B007 deliberately has no entry in the shipped distance table.
const TIMETABLE: &str = r#"{
    "rooms": [
        {
            "datum": "2023-05-02",
            "rtypes": [
                {
                    "raumtyp": "Seminarraum",
                    "stunden": {
                        "1": { "von": "08:00", "bis": "18:00", "raeume": "G216, G310, H101, B007, N101" }
                    }
                }
            ]
        }
    ]
}"#;

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 5, 2)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

#[tokio::test]
async fn test_ranking_by_distance_to_reference_room() {
    let source = LocalTimetable::from_json(TIMETABLE).unwrap();

    let suggested = find_suggested_rooms(&source, "G215", at(10, 0), at(11, 0))
        .await
        .unwrap();

    let names: Vec<&str> = suggested.iter().map(|c| c.room.as_str()).collect();
    // shipped distances from G215: G216=5, G310=58, H101=70; B007 unknown,
    // so it ranks last; N101 is on the other campus and is dropped.
    assert_eq!(names, vec!["G216", "G310", "H101", "B007"]);
}

#[tokio::test]
async fn test_cross_campus_rooms_are_excluded() {
    let source = LocalTimetable::from_json(TIMETABLE).unwrap();

    let suggested = find_suggested_rooms(&source, "G215", at(10, 0), at(11, 0))
        .await
        .unwrap();
    assert!(suggested.iter().all(|c| c.room != "N101"));

    // and the other way around: a Neuburg reference keeps only Neuburg rooms
    let suggested = find_suggested_rooms(&source, "N102", at(10, 0), at(11, 0))
        .await
        .unwrap();
    let names: Vec<&str> = suggested.iter().map(|c| c.room.as_str()).collect();
    assert_eq!(names, vec!["N101"]);
}

#[tokio::test]
async fn test_unknown_reference_room_keeps_name_order() {
    let source = LocalTimetable::from_json(TIMETABLE).unwrap();

    // ZZ900 has no distance entries; every candidate ties at infinity and
    // the room-name order from the search survives the stable sort.
    let suggested = find_suggested_rooms(&source, "ZZ900", at(10, 0), at(11, 0))
        .await
        .unwrap();

    let names: Vec<&str> = suggested.iter().map(|c| c.room.as_str()).collect();
    assert_eq!(names, vec!["B007", "G216", "G310", "H101"]);
}

#[tokio::test]
async fn test_empty_timetable_yields_no_suggestions() {
    let source = LocalTimetable::empty();
    let suggested = find_suggested_rooms(&source, "G215", at(10, 0), at(11, 0))
        .await
        .unwrap();
    assert!(suggested.is_empty());
}
