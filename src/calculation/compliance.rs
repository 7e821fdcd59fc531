//! Compliance assessment.
//!
//! Summarizes a usage series into a [`ComplianceReport`]: the status on a
//! reference date plus the peak and any overstay across the series.

use chrono::NaiveDate;

use crate::models::{ComplianceReport, ComplianceStatus, PresentDaySet, UsagePoint};

use super::rolling_window::{MAX_STAY_DAYS, days_available, days_used_on};

/// Assesses compliance for `reference_date` and across `usage_series`.
///
/// Usage on the reference date is counted directly from `present`, so the
/// reference may fall outside the series range (for example "today", long
/// after the last unlock). Overstay days are present days whose window holds
/// more than [`MAX_STAY_DAYS`].
///
/// # Example
///
/// ```
/// use stay_engine::calculation::{assess_compliance, compute_usage_series, normalize_trips};
/// use stay_engine::models::{ComplianceStatus, Trip};
/// use chrono::NaiveDate;
///
/// let trips = vec![Trip::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
/// )
/// .unwrap()];
/// let present = normalize_trips(&trips).unwrap();
/// let series = compute_usage_series(&trips).unwrap();
///
/// let report = assess_compliance(&present, &series, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
/// assert_eq!(report.days_used, 10);
/// assert_eq!(report.days_available, 80);
/// assert_eq!(report.status, ComplianceStatus::Compliant);
/// ```
pub fn assess_compliance(
    present: &PresentDaySet,
    usage_series: &[UsagePoint],
    reference_date: NaiveDate,
) -> ComplianceReport {
    let days_used = days_used_on(present, reference_date);

    let mut peak: Option<UsagePoint> = None;
    let mut first_overstay_date = None;
    let mut overstay_day_count = 0;

    for point in usage_series {
        if peak.is_none_or(|p| point.days_used > p.days_used) {
            peak = Some(*point);
        }
        if point.days_used > MAX_STAY_DAYS {
            if first_overstay_date.is_none() {
                first_overstay_date = Some(point.date);
            }
            if present.contains(point.date) {
                overstay_day_count += 1;
            }
        }
    }

    ComplianceReport {
        reference_date,
        days_used,
        days_available: days_available(days_used),
        status: status_for(days_used),
        peak_days_used: peak.map_or(0, |p| p.days_used),
        peak_date: peak.filter(|p| p.days_used > 0).map(|p| p.date),
        first_overstay_date,
        overstay_day_count,
    }
}

/// Maps a days-used count onto a compliance status.
pub fn status_for(days_used: u32) -> ComplianceStatus {
    if days_used > MAX_STAY_DAYS {
        ComplianceStatus::Overstay
    } else {
        ComplianceStatus::Compliant
    }
}
