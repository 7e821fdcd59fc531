//! Present day set model.
//!
//! This module contains the [`PresentDaySet`] type: the canonical, deduplicated
//! set of calendar days on which the traveler was present.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An ordered set of present calendar days.
///
/// Overlapping or adjacent trips merge naturally because each day is stored
/// once. Iteration is always in ascending date order.
///
/// # Example
///
/// ```
/// use stay_engine::models::PresentDaySet;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let set: PresentDaySet = [day, day].into_iter().collect();
/// assert_eq!(set.len(), 1);
/// assert!(set.contains(day));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresentDaySet {
    days: BTreeSet<NaiveDate>,
}

impl PresentDaySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a day, returning `true` if it was not already present.
    pub fn insert(&mut self, day: NaiveDate) -> bool {
        self.days.insert(day)
    }

    /// Returns the number of distinct present days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if no days are present.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns `true` if `day` is a present day.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    /// Iterates over present days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    /// The earliest present day, if any.
    pub fn first(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    /// The latest present day, if any.
    pub fn last(&self) -> Option<NaiveDate> {
        self.days.last().copied()
    }

    /// Counts present days in the inclusive range `[start, end]`.
    ///
    /// Returns zero when `start > end`.
    pub fn count_between(&self, start: NaiveDate, end: NaiveDate) -> usize {
        if start > end {
            return 0;
        }
        self.days.range(start..=end).count()
    }
}

impl FromIterator<NaiveDate> for PresentDaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

impl Extend<NaiveDate> for PresentDaySet {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.days.extend(iter);
    }
}
