//! Parsers for the upstream timetable payload.
//!
//! The room timetable arrives as JSON from the university's REST API. This
//! module turns that payload into the typed wire structs in
//! [`crate::models::timetable`], with errors that name the JSON path of the
//! offending field.
//!
//! # Example
//!
//! ```
//! use rooms_rust::parsing::parse_timetable_json;
//!
//! let days = parse_timetable_json(r#"{"rooms": []}"#).unwrap();
//! assert!(days.is_empty());
//! ```

pub mod timetable_json;

#[cfg(test)]
mod timetable_json_tests;

pub use timetable_json::parse_timetable_json;
