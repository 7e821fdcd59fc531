//! Unlock event derivation.
//!
//! An unlock date is the day a trip's last present day drops out of the
//! rolling window: its exit date plus [`WINDOW_DAYS`].

use chrono::NaiveDate;
use tracing::{debug, error};

use crate::error::{EngineError, EngineResult};
use crate::models::{Trip, UnlockEvent, UsagePoint};

use super::rolling_window::{WINDOW_DAYS, days_available};

/// Derives one unlock event per trip, sorted ascending by unlock date.
///
/// Each event's `days_available` is the allowance minus the usage recorded in
/// `usage_series` on the unlock date. Events that share a date are all kept,
/// in the order their trips were supplied; see [`deduplicate_unlock_events`]
/// to collapse them.
///
/// An empty trip list yields no events.
///
/// # Errors
///
/// - [`EngineError::InvalidTripOrder`] if a trip's dates are reversed.
/// - [`EngineError::LookupGap`] if an unlock date is missing from the series.
///   The series produced by
///   [`compute_usage_series`](super::compute_usage_series) always covers
///   every unlock date, so this indicates an internal defect.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::{compute_unlock_events, compute_usage_series};
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
/// let events = compute_unlock_events(&[trip], &series).unwrap();
///
/// assert_eq!(events[0].unlock_date, NaiveDate::from_ymd_opt(2024, 7, 8).unwrap());
/// assert_eq!(events[0].days_available, 90);
/// ```
pub fn compute_unlock_events(
    trips: &[Trip],
    usage_series: &[UsagePoint],
) -> EngineResult<Vec<UnlockEvent>> {
    let mut events = Vec::with_capacity(trips.len());

    for (index, trip) in trips.iter().enumerate() {
        trip.validate(index)?;
        let unlock_date = trip.exit_plus(WINDOW_DAYS)?;
        let used = lookup_usage(usage_series, unlock_date)?;

        events.push(UnlockEvent {
            unlock_date,
            days_available: days_available(used),
            trip: *trip,
        });
    }

    // Stable sort keeps supplied order for colliding dates.
    events.sort_by_key(|event| event.unlock_date);

    debug!(events = events.len(), "Derived unlock events");

    Ok(events)
}

/// Keeps only the first event for each unlock date.
///
/// Expects events sorted by date, as returned by [`compute_unlock_events`].
pub fn deduplicate_unlock_events(events: &[UnlockEvent]) -> Vec<UnlockEvent> {
    let mut unique: Vec<UnlockEvent> = Vec::with_capacity(events.len());
    for event in events {
        if unique.last().map(|e| e.unlock_date) != Some(event.unlock_date) {
            unique.push(*event);
        }
    }
    unique
}

/// Finds the usage recorded on `date` in a contiguous, ascending series.
fn lookup_usage(series: &[UsagePoint], date: NaiveDate) -> EngineResult<u32> {
    match series.binary_search_by_key(&date, |point| point.date) {
        Ok(position) => Ok(series[position].days_used),
        Err(_) => {
            let gap = EngineError::LookupGap {
                date,
                series_start: series.first().map(|p| p.date),
                series_end: series.last().map(|p| p.date),
            };
            error!(error = %gap, "Unlock date missing from usage series");
            Err(gap)
        }
    }
}
