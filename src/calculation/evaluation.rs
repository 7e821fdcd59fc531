//! Full evaluation of a trip collection.
//!
//! Runs the pipeline trips → present days → usage series → unlock events →
//! compliance report and packages the outputs into an [`EvaluationResult`].

use std::fmt::Write;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{EvaluationResult, Trip};

use super::compliance::assess_compliance;
use super::stay_planner::max_continuous_stay;
use super::trip_normalizer::normalize_trips;
use super::unlock_events::{compute_unlock_events, deduplicate_unlock_events};
use super::usage_series::usage_series_for;

/// Default `chrono` format for dates in unlock summaries, e.g. `08 Jul 2024`.
pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";

/// Caller choices for a single evaluation.
#[derive(Debug, Clone)]
pub struct EvaluationOptions {
    /// Date to assess compliance on.
    pub reference_date: NaiveDate,
    /// If set, compute the longest stay starting on this date.
    pub planned_entry_date: Option<NaiveDate>,
    /// Collapse unlock events that share a date.
    pub dedupe_unlock_dates: bool,
    /// `chrono` format string for summary lines.
    pub date_format: String,
}

impl EvaluationOptions {
    /// Options assessing `reference_date` with every other choice at its default.
    pub fn for_date(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            planned_entry_date: None,
            dedupe_unlock_dates: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Returns `true` if `format` renders a date without a formatting error.
///
/// `chrono` reports unknown specifiers such as `%Q` only when the date is
/// written out, so the check renders a sample date.
pub(crate) fn date_format_is_valid(format: &str) -> bool {
    let sample = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN);
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(format)).is_ok()
}

/// Evaluates a trip collection end to end.
///
/// Each call is independent: the same trips and options always produce the
/// same series, events and report (only the id, timestamp and duration vary).
///
/// # Errors
///
/// - [`EngineError::CalculationError`] if `options.date_format` is not a
///   usable `chrono` format string, or the series range overflows the
///   calendar.
/// - [`EngineError::InvalidTripOrder`] if a trip's dates are reversed.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::{EvaluationOptions, evaluate_trips};
/// use stay_engine::models::Trip;
/// use chrono::NaiveDate;
///
/// let trips = vec![Trip::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
/// )
/// .unwrap()];
/// let options = EvaluationOptions::for_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
///
/// let result = evaluate_trips(&trips, &options).unwrap();
/// assert_eq!(result.present_day_count, 10);
/// assert_eq!(result.unlock_summary, vec!["08 Jul 2024: 90 days available".to_string()]);
/// ```
pub fn evaluate_trips(trips: &[Trip], options: &EvaluationOptions) -> EngineResult<EvaluationResult> {
    let start_time = Instant::now();

    if !date_format_is_valid(&options.date_format) {
        return Err(EngineError::CalculationError {
            message: format!("invalid date format '{}'", options.date_format),
        });
    }

    let present = normalize_trips(trips)?;
    let usage_series = usage_series_for(trips, &present)?;
    let mut unlock_events = compute_unlock_events(trips, &usage_series)?;
    if options.dedupe_unlock_dates {
        unlock_events = deduplicate_unlock_events(&unlock_events);
    }

    let unlock_summary = unlock_events
        .iter()
        .map(|event| event.describe(&options.date_format))
        .collect();
    let compliance = assess_compliance(&present, &usage_series, options.reference_date);
    let planned_stay_days = options
        .planned_entry_date
        .map(|entry| max_continuous_stay(&present, entry));

    Ok(EvaluationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        trip_count: trips.len(),
        present_day_count: present.len(),
        usage_series,
        unlock_events,
        unlock_summary,
        compliance,
        planned_stay_days,
        duration_us: start_time.elapsed().as_micros() as u64,
    })
}
