//! Calculation logic for the Stay Allowance Engine.
//!
//! This module contains the trip set normalizer, the rolling window
//! arithmetic, usage series construction, unlock event derivation,
//! compliance assessment, stay planning, and the end-to-end evaluation
//! that ties them together.

mod compliance;
mod evaluation;
mod rolling_window;
mod stay_planner;
mod trip_normalizer;
mod unlock_events;
mod usage_series;

pub use compliance::{assess_compliance, status_for};
pub use evaluation::{DEFAULT_DATE_FORMAT, EvaluationOptions, evaluate_trips};
pub(crate) use evaluation::date_format_is_valid;
pub use rolling_window::{
    MAX_STAY_DAYS, WINDOW_DAYS, days_available, days_used_on, series_range, window_start,
};
pub use stay_planner::max_continuous_stay;
pub use trip_normalizer::normalize_trips;
pub use unlock_events::{compute_unlock_events, deduplicate_unlock_events};
pub use usage_series::{compute_usage_series, usage_between};
