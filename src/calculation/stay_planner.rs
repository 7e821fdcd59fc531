//! Stay planning.
//!
//! Answers "if I enter on this date, how long can I stay?" against an
//! existing set of present days.

use chrono::NaiveDate;

use crate::models::PresentDaySet;

use super::rolling_window::{MAX_STAY_DAYS, days_used_on};

/// Returns the longest run of consecutive days from `start_date` that keeps
/// every day of the run within the allowance.
///
/// Each candidate day is added to a copy of `present` and its window is
/// rechecked. Days already present count once. The result never exceeds
/// [`MAX_STAY_DAYS`]; zero means entry on `start_date` itself would already
/// break the rule.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::max_continuous_stay;
/// use stay_engine::models::PresentDaySet;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(max_continuous_stay(&PresentDaySet::new(), start), 90);
/// ```
pub fn max_continuous_stay(present: &PresentDaySet, start_date: NaiveDate) -> u32 {
    let mut planned = present.clone();
    let mut stay = 0;

    for day in start_date.iter_days().take(MAX_STAY_DAYS as usize) {
        planned.insert(day);
        if days_used_on(&planned, day) > MAX_STAY_DAYS {
            break;
        }
        stay += 1;
    }

    stay
}
