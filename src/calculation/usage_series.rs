//! Usage series construction.
//!
//! Produces the daily [`UsagePoint`] series consumed by charts and by the
//! unlock event derivation.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{PresentDaySet, Trip, UsagePoint};

use super::rolling_window::{series_range, window_start};
use super::trip_normalizer::normalize_trips;

/// Computes the daily usage series for a trip collection.
///
/// The series covers every date from one day before the earliest entry to
/// 180 days after the latest exit, in ascending order. Each point holds the
/// number of present days inside the trailing window ending at that date.
///
/// An empty trip list yields an empty series.
///
/// # Errors
///
/// - [`EngineError::InvalidTripOrder`](crate::error::EngineError::InvalidTripOrder)
///   if any trip's entry date is after its exit date.
/// - [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
///   if the range end is not representable.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::compute_usage_series;
/// use stay_engine::models::Trip;
/// use chrono::NaiveDate;
///
/// let trip = Trip::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
/// )
/// .unwrap();
///
/// let series = compute_usage_series(&[trip]).unwrap();
/// assert_eq!(series.first().unwrap().days_used, 0); // 2023-12-31
/// assert_eq!(series[10].days_used, 10);             // 2024-01-10
/// assert_eq!(series.last().unwrap().days_used, 0);  // 2024-07-08
/// ```
pub fn compute_usage_series(trips: &[Trip]) -> EngineResult<Vec<UsagePoint>> {
    let present = normalize_trips(trips)?;
    usage_series_for(trips, &present)
}

/// Builds the series for trips whose present days are already normalized.
///
/// `present` must be the result of [`normalize_trips`] on `trips`.
pub(crate) fn usage_series_for(
    trips: &[Trip],
    present: &PresentDaySet,
) -> EngineResult<Vec<UsagePoint>> {
    let Some((lower, upper)) = series_range(trips)? else {
        return Ok(Vec::new());
    };

    let series = usage_between(present, lower, upper);

    debug!(
        series_start = %lower,
        series_end = %upper,
        points = series.len(),
        "Computed usage series"
    );

    Ok(series)
}

/// Builds the usage series over `[lower, upper]` for an already normalized set.
///
/// Uses a two-pointer sliding window over the sorted present days, so the
/// cost is O(range + days) instead of recounting the set per date. The result
/// is identical to calling [`days_used_on`](super::days_used_on) for each date.
pub fn usage_between(
    present: &PresentDaySet,
    lower: NaiveDate,
    upper: NaiveDate,
) -> Vec<UsagePoint> {
    let days: Vec<NaiveDate> = present.iter().collect();
    let mut series = Vec::new();

    // days[tail..head] is the set of present days inside the current window.
    let mut tail = 0;
    let mut head = 0;

    for date in lower.iter_days().take_while(|d| *d <= upper) {
        while head < days.len() && days[head] <= date {
            head += 1;
        }
        let start = window_start(date);
        while tail < head && days[tail] < start {
            tail += 1;
        }

        series.push(UsagePoint {
            date,
            days_used: (head - tail) as u32,
        });
    }

    series
}
