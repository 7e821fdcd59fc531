//! Configuration types for the stay engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_DATE_FORMAT;

/// Metadata about the rule being applied, from `rule.yaml`.
///
/// Purely descriptive: the window width and allowance are fixed constants
/// in [`crate::calculation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMetadata {
    /// Short identifier (e.g., "SCHENGEN_90_180").
    pub code: String,
    /// The human-readable name of the rule.
    pub name: String,
    /// The version or effective date of the rule text.
    pub version: String,
    /// URL to the official rule documentation.
    pub source_url: String,
}

/// Request guards and display settings, from `limits.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of trips accepted in one evaluation.
    pub max_trips: usize,
    /// Maximum number of days a single trip may span.
    pub max_trip_days: i64,
    /// Maximum number of days from the earliest entry to the latest exit,
    /// inclusive. Bounds the length of the usage series.
    #[serde(default = "default_max_span_days")]
    pub max_span_days: i64,
    /// `chrono` format string for dates in unlock summaries.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_max_span_days() -> i64 {
    36_600
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// The complete engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    rule: RuleMetadata,
    limits: LimitsConfig,
}

impl EngineConfig {
    /// Creates a new engine configuration.
    pub fn new(rule: RuleMetadata, limits: LimitsConfig) -> Self {
        Self { rule, limits }
    }

    /// Returns the rule metadata.
    pub fn rule(&self) -> &RuleMetadata {
        &self.rule
    }

    /// Returns the request limits.
    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }
}
