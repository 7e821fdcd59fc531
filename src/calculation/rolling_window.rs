//! Rolling window arithmetic.
//!
//! The rule counts present days inside a trailing 180-day window that ends on
//! (and includes) the reference date. Both the width and the allowance are
//! fixed by the rule; an off-by-one in the width silently changes the legal
//! threshold.

use chrono::{Days, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{PresentDaySet, Trip};

/// Width of the rolling window in calendar days, reference date included.
pub const WINDOW_DAYS: u64 = 180;

/// Maximum number of present days allowed inside any window.
pub const MAX_STAY_DAYS: u32 = 90;

/// Returns the first day of the window ending at `date`.
///
/// The window is `[date - 179, date]`, exactly [`WINDOW_DAYS`] days long.
/// Saturates at the earliest representable date.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::window_start;
/// use chrono::NaiveDate;
///
/// let unlock = NaiveDate::from_ymd_opt(2024, 7, 8).unwrap();
/// assert_eq!(window_start(unlock), NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());
/// ```
pub fn window_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(WINDOW_DAYS - 1))
        .unwrap_or(NaiveDate::MIN)
}

/// Counts present days in the window ending at `date` by direct lookup.
///
/// Works for any date, inside or outside a computed series range.
pub fn days_used_on(present: &PresentDaySet, date: NaiveDate) -> u32 {
    // Bounded by WINDOW_DAYS, so the cast cannot truncate.
    present.count_between(window_start(date), date) as u32
}

/// Allowance left on a date given the days used; negative during an overstay.
pub fn days_available(days_used: u32) -> i32 {
    MAX_STAY_DAYS as i32 - days_used as i32
}

/// Derives the inclusive date range the usage series must cover.
///
/// The range runs from one day before the earliest entry to [`WINDOW_DAYS`]
/// days after the latest exit, so every trip's unlock date lies inside it.
/// Returns `None` for an empty trip list.
///
/// # Errors
///
/// Returns a calculation error if the upper bound is not representable.
pub fn series_range(trips: &[Trip]) -> EngineResult<Option<(NaiveDate, NaiveDate)>> {
    let Some(earliest_entry) = trips.iter().map(|t| t.entry_date).min() else {
        return Ok(None);
    };
    let Some(latest_exit) = trips.iter().map(|t| t.exit_date).max() else {
        return Ok(None);
    };

    let lower = earliest_entry.pred_opt().unwrap_or(earliest_entry);
    let upper = latest_exit
        .checked_add_days(Days::new(WINDOW_DAYS))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "series end {} + {} days is outside the supported calendar",
                latest_exit, WINDOW_DAYS
            ),
        })?;

    Ok(Some((lower, upper)))
}
