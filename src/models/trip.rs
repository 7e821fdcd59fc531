//! Trip model.
//!
//! This module defines the [`Trip`] struct, an inclusive pair of calendar
//! dates during which the traveler is present in the monitored area.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a single stay, from entry to exit, both days inclusive.
///
/// The fields are public so trips can be built from deserialized input;
/// [`Trip::new`] and the normalizer both enforce `entry_date <= exit_date`.
///
/// # Example
///
/// ```
/// use stay_engine::models::Trip;
/// use chrono::NaiveDate;
///
/// let trip = Trip::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(trip.length_days(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trip {
    /// The first day of presence.
    pub entry_date: NaiveDate,
    /// The last day of presence.
    pub exit_date: NaiveDate,
}

impl Trip {
    /// Creates a trip, rejecting an entry date after the exit date.
    ///
    /// Same-day trips (entry equal to exit) are valid and count as one day.
    pub fn new(entry_date: NaiveDate, exit_date: NaiveDate) -> EngineResult<Self> {
        let trip = Self {
            entry_date,
            exit_date,
        };
        trip.validate(0)?;
        Ok(trip)
    }

    /// Checks the date order, reporting `index` as the trip's position.
    pub fn validate(&self, index: usize) -> EngineResult<()> {
        if self.entry_date > self.exit_date {
            return Err(EngineError::InvalidTripOrder {
                index,
                entry_date: self.entry_date,
                exit_date: self.exit_date,
            });
        }
        Ok(())
    }

    /// Returns the number of present days, counting both entry and exit.
    ///
    /// Returns zero or less for a trip whose dates are out of order.
    pub fn length_days(&self) -> i64 {
        (self.exit_date - self.entry_date).num_days() + 1
    }

    /// Iterates over every present day of the trip in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let exit_date = self.exit_date;
        self.entry_date
            .iter_days()
            .take_while(move |day| *day <= exit_date)
    }

    /// Returns the date `offset_days` after the exit date, if representable.
    pub(crate) fn exit_plus(&self, offset_days: u64) -> EngineResult<NaiveDate> {
        self.exit_date
            .checked_add_days(Days::new(offset_days))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "{} + {} days is outside the supported calendar",
                    self.exit_date, offset_days
                ),
            })
    }
}
