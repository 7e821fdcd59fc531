//! Request types for the Stay Allowance Engine API.
//!
//! This module defines the JSON request structures for the `/evaluate` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Trip;

/// Request body for the `/evaluate` endpoint.
///
/// The caller owns the trip list and sends all of it with every request;
/// the server keeps no trips between requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The trips to evaluate, in any order.
    pub trips: Vec<TripRequest>,
    /// Date to assess compliance on. Defaults to today (UTC).
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// If set, the response includes the longest stay starting on this date.
    #[serde(default)]
    pub planned_entry_date: Option<NaiveDate>,
    /// Collapse unlock events sharing a date into one.
    #[serde(default)]
    pub dedupe_unlock_dates: bool,
}

/// Trip information in an evaluation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// The first day of presence.
    pub entry_date: NaiveDate,
    /// The last day of presence.
    pub exit_date: NaiveDate,
}

impl From<TripRequest> for Trip {
    fn from(req: TripRequest) -> Self {
        // Date order is validated by the normalizer, which knows the trip's position.
        Trip {
            entry_date: req.entry_date,
            exit_date: req.exit_date,
        }
    }
}
