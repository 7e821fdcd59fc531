//! Error types for the Stay Allowance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while evaluating trips.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Stay Allowance Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use stay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rule.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or held invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A trip's entry date falls after its exit date.
    #[error("Invalid trip at position {index}: entry date {entry_date} is after exit date {exit_date}")]
    InvalidTripOrder {
        /// Zero-based position of the trip in the supplied collection.
        index: usize,
        /// The trip's entry date.
        entry_date: NaiveDate,
        /// The trip's exit date.
        exit_date: NaiveDate,
    },

    /// More trips were supplied than the configured limit allows.
    #[error("Too many trips: {count} supplied, at most {max} allowed")]
    TooManyTrips {
        /// The number of trips supplied.
        count: usize,
        /// The configured maximum.
        max: usize,
    },

    /// A single trip spans more days than the configured limit allows.
    #[error("Trip at position {index} spans {days} days, at most {max} allowed")]
    TripTooLong {
        /// Zero-based position of the trip in the supplied collection.
        index: usize,
        /// The number of present days the trip spans.
        days: i64,
        /// The configured maximum.
        max: i64,
    },

    /// The trips cover more calendar days than the configured limit allows.
    ///
    /// The usage series grows with the distance from the earliest entry to
    /// the latest exit, so widely separated trips are refused up front.
    #[error("Trips span {days} days from {earliest_entry} to {latest_exit}, at most {max} allowed")]
    SpanTooWide {
        /// Earliest entry date across all trips.
        earliest_entry: NaiveDate,
        /// Latest exit date across all trips.
        latest_exit: NaiveDate,
        /// Inclusive number of days between the two.
        days: i64,
        /// The configured maximum.
        max: i64,
    },

    /// An unlock date could not be found in the usage series.
    ///
    /// The series range always covers every unlock date, so this signals a
    /// defect in range derivation rather than bad input.
    #[error("Usage series has no entry for {date} (series covers {series_start:?} to {series_end:?})")]
    LookupGap {
        /// The date that was looked up.
        date: NaiveDate,
        /// First date of the series, if any.
        series_start: Option<NaiveDate>,
        /// Last date of the series, if any.
        series_end: Option<NaiveDate>,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
