//! Core data models for the Stay Allowance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod evaluation_result;
mod present_days;
mod trip;
mod usage;

pub use evaluation_result::{ComplianceReport, ComplianceStatus, EvaluationResult};
pub use present_days::PresentDaySet;
pub use trip::Trip;
pub use usage::{UnlockEvent, UsagePoint};
