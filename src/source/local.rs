//! In-memory timetable source.
//!
//! This module provides a local implementation of [`TimetableSource`]
//! suitable for unit testing and local development. All data is held in
//! memory, providing fast, deterministic and isolated execution.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, RwLock};

use super::{SourceError, SourceResult, TimetableSource};
use crate::models::timetable::TimetableDay;
use crate::parsing::parse_timetable_json;

/// In-memory timetable source.
///
/// # Example
/// ```
/// use rooms_rust::source::LocalTimetable;
///
/// let source = LocalTimetable::from_json(r#"{"rooms": []}"#).unwrap();
/// ```
#[derive(Clone, Default)]
pub struct LocalTimetable {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    days: Vec<TimetableDay>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            days: Vec::new(),
            is_healthy: true,
        }
    }
}

impl LocalTimetable {
    /// Create a source holding the given day records.
    pub fn new(days: Vec<TimetableDay>) -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                days,
                is_healthy: true,
            })),
        }
    }

    /// Create an empty source.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Create a source from a raw timetable JSON payload.
    pub fn from_json(json_str: &str) -> anyhow::Result<Self> {
        Ok(Self::new(parse_timetable_json(json_str)?))
    }

    /// Toggle the simulated connection health. While unhealthy, every
    /// fetch fails with a network error, which lets tests exercise the
    /// failure propagation of the search layer.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().expect("LocalTimetable lock poisoned");
        data.is_healthy = healthy;
    }

    /// Append a day record.
    pub fn push_day(&self, day: TimetableDay) {
        let mut data = self.data.write().expect("LocalTimetable lock poisoned");
        data.days.push(day);
    }
}

#[async_trait]
impl TimetableSource for LocalTimetable {
    async fn fetch_day(&self, date: NaiveDate) -> SourceResult<Vec<TimetableDay>> {
        let data = self
            .data
            .read()
            .map_err(|_| SourceError::network("LocalTimetable lock poisoned"))?;

        if !data.is_healthy {
            return Err(SourceError::network("simulated connection failure"));
        }

        let date_str = date.format("%Y-%m-%d").to_string();
        Ok(data
            .days
            .iter()
            .filter(|day| day.date == date_str)
            .cloned()
            .collect())
    }
}
