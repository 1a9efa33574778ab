//! # Rooms Rust Backend
//!
//! Free-room search engine for the university campus app.
//!
//! This crate computes, from the university's raw per-day room timetable,
//! which physical rooms are unoccupied during a requested time window, and
//! ranks alternative free rooms by walking distance to a reference room.
//! Presentation, authentication and the HTTP client that actually fetches
//! the timetable live in the surrounding application; this crate owns the
//! algorithmic core behind them.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types (openings, candidates) and raw wire types
//! - [`parsing`]: Deserialization of the upstream timetable JSON
//! - [`source`]: The async fetch boundary ([`source::TimetableSource`])
//! - [`services`]: Opening computation, room search, suggestions, presets
//! - [`distances`]: Static pairwise room-distance table
//! - [`config`]: TOML-backed runtime configuration
//!
//! ## Example
//!
//! ```no_run
//! use rooms_rust::services::search::{search_rooms, BuildingFilter};
//! use rooms_rust::source::LocalTimetable;
//! use chrono::NaiveDate;
//!
//! # async fn example() -> Result<(), rooms_rust::services::search::SearchError> {
//! let source = LocalTimetable::from_json(r#"{"rooms": []}"#).unwrap();
//! let begin = NaiveDate::from_ymd_opt(2023, 5, 2).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let end = begin + chrono::Duration::hours(1);
//!
//! let free = search_rooms(&source, begin, end, &BuildingFilter::All).await?;
//! for candidate in free {
//!     println!("{} is free until {}", candidate.room, candidate.until);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod distances;
pub mod models;
pub mod parsing;
pub mod services;
pub mod source;
