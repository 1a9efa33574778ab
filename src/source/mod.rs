//! The timetable fetch boundary.
//!
//! Room searches need one day of raw timetable data. Where that data comes
//! from (the university REST API, a fixture, a replay file) is abstracted
//! behind the [`TimetableSource`] trait so the search services can be tested
//! without any network, mirroring the repository pattern used elsewhere in
//! the stack.
//!
//! The trait is the single asynchronous suspension point of a query: every
//! transformation after the fetch is pure and synchronous.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::timetable::TimetableDay;

pub mod local;

pub use local::LocalTimetable;

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Error type for timetable fetch operations.
///
/// Fetch failures are propagated unchanged to search callers; the core
/// performs no retries.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Transport-level failure (connection refused, timeout, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// The upstream API answered but rejected the request.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The upstream answered with a payload this crate cannot decode.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl SourceError {
    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create an upstream rejection error.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

/// Source of raw timetable data.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TimetableSource: Send + Sync {
    /// Fetch the raw timetable records for one calendar day.
    ///
    /// # Arguments
    /// * `date` - The calendar day to fetch
    ///
    /// # Returns
    /// * `Ok(Vec<TimetableDay>)` - The day's records (possibly empty)
    /// * `Err(SourceError)` - If the fetch fails
    async fn fetch_day(&self, date: NaiveDate) -> SourceResult<Vec<TimetableDay>>;
}

#[cfg(test)]
mod tests {
    use super::SourceError;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SourceError::network("connection refused").to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            SourceError::upstream("session expired").to_string(),
            "Upstream error: session expired"
        );
        assert_eq!(
            SourceError::decode("unexpected payload").to_string(),
            "Decode error: unexpected payload"
        );
    }
}
