//! Stay Allowance Engine for the 90/180-day rule
//!
//! This crate computes compliance under a "90 days within any rolling 180-day
//! window" travel rule. Trips are normalized into a set of present days, a
//! daily usage series is derived from that set, and unlock dates are reported
//! for the moments when earlier presence drops out of the window.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
