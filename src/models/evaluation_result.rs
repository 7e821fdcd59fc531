//! Evaluation result models for the Stay Allowance Engine.
//!
//! This module contains the [`EvaluationResult`] type and the
//! [`ComplianceReport`] it carries, capturing every output of one evaluation
//! of a trip collection.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{UnlockEvent, UsagePoint};

/// Whether the traveler is within the allowance on a given date.
///
/// # Example
///
/// ```
/// use stay_engine::models::ComplianceStatus;
///
/// let status = ComplianceStatus::Compliant;
/// assert_eq!(serde_json::to_string(&status).unwrap(), "\"compliant\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Days used are within the allowance.
    Compliant,
    /// Days used exceed the allowance.
    Overstay,
}

/// Compliance figures for a reference date and across the whole series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// The date the status was assessed for.
    pub reference_date: NaiveDate,
    /// Present days inside the window ending at the reference date.
    pub days_used: u32,
    /// Allowance minus `days_used`; negative during an overstay.
    pub days_available: i32,
    /// Status on the reference date.
    pub status: ComplianceStatus,
    /// Highest `days_used` anywhere in the series.
    pub peak_days_used: u32,
    /// First date at which the peak is reached.
    pub peak_date: Option<NaiveDate>,
    /// First series date with usage above the allowance.
    pub first_overstay_date: Option<NaiveDate>,
    /// Number of present days on which usage exceeded the allowance.
    pub overstay_day_count: u32,
}

/// The complete result of evaluating a trip collection.
///
/// # Example
///
/// ```
/// use stay_engine::models::{ComplianceReport, ComplianceStatus, EvaluationResult};
/// use chrono::{NaiveDate, Utc};
/// use uuid::Uuid;
///
/// let result = EvaluationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     trip_count: 0,
///     present_day_count: 0,
///     usage_series: vec![],
///     unlock_events: vec![],
///     unlock_summary: vec![],
///     compliance: ComplianceReport {
///         reference_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         days_used: 0,
///         days_available: 90,
///         status: ComplianceStatus::Compliant,
///         peak_days_used: 0,
///         peak_date: None,
///         first_overstay_date: None,
///         overstay_day_count: 0,
///     },
///     planned_stay_days: None,
///     duration_us: 0,
/// };
/// assert!(result.usage_series.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Unique identifier for this evaluation.
    pub calculation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// Number of trips supplied.
    pub trip_count: usize,
    /// Number of distinct present days after normalization.
    pub present_day_count: usize,
    /// Daily usage from one day before the earliest entry to 180 days after the latest exit.
    pub usage_series: Vec<UsagePoint>,
    /// Unlock events sorted ascending by date.
    pub unlock_events: Vec<UnlockEvent>,
    /// One human-readable line per unlock event.
    pub unlock_summary: Vec<String>,
    /// Compliance figures.
    pub compliance: ComplianceReport,
    /// Longest stay possible from the requested planned entry date, if one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_stay_days: Option<u32>,
    /// The evaluation duration in microseconds.
    pub duration_us: u64,
}
