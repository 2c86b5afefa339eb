//! Error types for bi5feed.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for bi5feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;

/// Errors surfaced to callers of the cursor and locator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The hour file could not be fetched and decompressed.
    ///
    /// Raised only after every retry attempt failed. Callers usually skip
    /// the hour and continue with the next one.
    #[error("{path} not found after {attempts} attempts: {reason}")]
    Fetch {
        /// Resource path that could not be retrieved.
        path: String,
        /// Number of attempts made.
        attempts: u32,
        /// Reason reported by the last attempt.
        reason: String,
    },

    /// A record was decoded outside the bounds of its buffer.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
