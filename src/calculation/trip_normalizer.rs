//! Trip set normalization.
//!
//! This module turns a collection of trips into the canonical
//! [`PresentDaySet`], validating each trip's date order on the way.

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{PresentDaySet, Trip};

/// Validates trips and expands them into the set of present days.
///
/// Every trip contributes each day of its inclusive `[entry_date, exit_date]`
/// range. Overlapping and adjacent trips are merged by the set, so no day is
/// counted twice. Runs in O(total trip-days).
///
/// # Errors
///
/// Returns [`EngineError::InvalidTripOrder`](crate::error::EngineError::InvalidTripOrder)
/// for the first trip whose entry date falls after its exit date. Dates are
/// never swapped.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::normalize_trips;
/// use stay_engine::models::Trip;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let trips = vec![
///     Trip::new(d(1), d(5)).unwrap(),
///     Trip::new(d(3), d(8)).unwrap(),
/// ];
///
/// let present = normalize_trips(&trips).unwrap();
/// assert_eq!(present.len(), 8);
/// ```
pub fn normalize_trips(trips: &[Trip]) -> EngineResult<PresentDaySet> {
    let mut present = PresentDaySet::new();

    for (index, trip) in trips.iter().enumerate() {
        trip.validate(index)?;
        present.extend(trip.days());
    }

    debug!(
        trip_count = trips.len(),
        present_day_count = present.len(),
        "Normalized trips into present days"
    );

    Ok(present)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn trip(entry: &str, exit: &str) -> Trip {
        Trip {
            entry_date: make_date(entry),
            exit_date: make_date(exit),
        }
    }

    /// NM-001: overlapping trips are unioned, not summed
    #[test]
    fn test_overlapping_trips_union() {
        let trips = vec![
            trip("2024-01-01", "2024-01-05"),
            trip("2024-01-03", "2024-01-08"),
        ];

        let present = normalize_trips(&trips).unwrap();

        assert_eq!(present.len(), 8);
        assert_eq!(present.first(), Some(make_date("2024-01-01")));
        assert_eq!(present.last(), Some(make_date("2024-01-08")));
    }

    /// NM-002: adjacent trips merge without gaps or double counting
    #[test]
    fn test_adjacent_trips_merge() {
        let trips = vec![
            trip("2024-01-01", "2024-01-05"),
            trip("2024-01-05", "2024-01-06"),
            trip("2024-01-07", "2024-01-07"),
        ];

        let present = normalize_trips(&trips).unwrap();
        assert_eq!(present.len(), 7);
    }

    /// NM-003: empty input yields empty set
    #[test]
    fn test_empty_input_yields_empty_set() {
        let present = normalize_trips(&[]).unwrap();
        assert!(present.is_empty());
    }

    /// NM-004: reversed trip rejected with its position
    #[test]
    fn test_reversed_trip_rejected_with_position() {
        let trips = vec![
            trip("2024-01-01", "2024-01-05"),
            trip("2024-02-10", "2024-02-01"),
        ];

        match normalize_trips(&trips) {
            Err(EngineError::InvalidTripOrder {
                index,
                entry_date,
                exit_date,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(entry_date, make_date("2024-02-10"));
                assert_eq!(exit_date, make_date("2024-02-01"));
            }
            other => panic!("Expected InvalidTripOrder, got {:?}", other),
        }
    }

    #[test]
    fn test_identical_trips_count_once() {
        let trips = vec![
            trip("2024-06-01", "2024-06-10"),
            trip("2024-06-01", "2024-06-10"),
        ];
        assert_eq!(normalize_trips(&trips).unwrap().len(), 10);
    }

    #[test]
    fn test_disjoint_trips_keep_gap() {
        let trips = vec![
            trip("2024-01-01", "2024-01-02"),
            trip("2024-01-10", "2024-01-11"),
        ];
        let present = normalize_trips(&trips).unwrap();
        assert_eq!(present.len(), 4);
        assert!(!present.contains(make_date("2024-01-05")));
    }
}
