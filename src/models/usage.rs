//! Usage series and unlock event models.
//!
//! This module contains the per-date [`UsagePoint`] produced by the rolling
//! window evaluator and the [`UnlockEvent`] derived from each trip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Trip;

/// The number of present days inside the trailing window ending at `date`.
///
/// # Example
///
/// ```
/// use stay_engine::models::UsagePoint;
/// use chrono::NaiveDate;
///
/// let point = UsagePoint {
///     date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     days_used: 10,
/// };
/// assert_eq!(point.days_used, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsagePoint {
    /// The reference date (last day of the window).
    pub date: NaiveDate,
    /// Present days within `[date - 179, date]`.
    pub days_used: u32,
}

/// A date on which a trip's presence has fully left the rolling window.
///
/// `days_available` is the allowance minus the days still used on that date.
/// It is negative when the remaining presence already exceeds the allowance.
///
/// # Example
///
/// ```
/// use stay_engine::models::{Trip, UnlockEvent};
/// use chrono::NaiveDate;
///
/// let trip = Trip::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
/// )
/// .unwrap();
/// let event = UnlockEvent {
///     unlock_date: NaiveDate::from_ymd_opt(2024, 7, 8).unwrap(),
///     days_available: 90,
///     trip,
/// };
/// assert_eq!(event.describe("%d %b %Y"), "08 Jul 2024: 90 days available");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockEvent {
    /// The trip's exit date plus the window length.
    pub unlock_date: NaiveDate,
    /// Allowance left on the unlock date.
    pub days_available: i32,
    /// The trip this event was derived from.
    pub trip: Trip,
}

impl UnlockEvent {
    /// Renders a one-line summary using a `chrono` format string for the date.
    ///
    /// # Panics
    ///
    /// Panics if `date_format` holds an unknown specifier. `evaluate_trips`
    /// and `ConfigLoader` reject such formats before they reach this call.
    pub fn describe(&self, date_format: &str) -> String {
        let noun = if self.days_available == 1 { "day" } else { "days" };
        format!(
            "{}: {} {} available",
            self.unlock_date.format(date_format),
            self.days_available,
            noun
        )
    }
}
