//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::calculation::date_format_is_valid;
use crate::error::{EngineError, EngineResult};
use crate::models::Trip;

use super::types::{EngineConfig, LimitsConfig, RuleMetadata};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and enforces the request limits they define.
///
/// # Directory Structure
///
/// ```text
/// config/schengen/
/// ├── rule.yaml    # Rule metadata
/// └── limits.yaml  # Request limits and display settings
/// ```
///
/// # Example
///
/// ```no_run
/// use stay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/schengen").unwrap();
/// println!("Loaded rule: {}", loader.rule().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A limit is zero or negative, or the date format is unusable
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stay_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/schengen")?;
    /// # Ok::<(), stay_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rule = Self::load_yaml::<RuleMetadata>(&path.join("rule.yaml"))?;

        let limits_path = path.join("limits.yaml");
        let limits = Self::load_yaml::<LimitsConfig>(&limits_path)?;
        Self::validate_limits(&limits, &limits_path)?;

        Ok(Self {
            config: EngineConfig::new(rule, limits),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_limits(limits: &LimitsConfig, path: &Path) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if limits.max_trips == 0 {
            return Err(invalid("max_trips must be greater than zero"));
        }
        if limits.max_trip_days <= 0 {
            return Err(invalid("max_trip_days must be greater than zero"));
        }
        if limits.max_span_days <= 0 {
            return Err(invalid("max_span_days must be greater than zero"));
        }
        if limits.date_format.trim().is_empty() || !date_format_is_valid(&limits.date_format) {
            return Err(invalid("date_format must be a valid chrono format string"));
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the rule metadata.
    pub fn rule(&self) -> &RuleMetadata {
        self.config.rule()
    }

    /// Returns the request limits.
    pub fn limits(&self) -> &LimitsConfig {
        self.config.limits()
    }

    /// Checks a trip collection against the configured limits.
    ///
    /// Date order is not checked here; the normalizer reports it with the
    /// trip's position.
    ///
    /// # Errors
    ///
    /// - `TooManyTrips` when more than `max_trips` trips are supplied.
    /// - `TripTooLong` for the first trip spanning more than `max_trip_days`.
    /// - `SpanTooWide` when the earliest entry and latest exit are more than
    ///   `max_span_days` apart.
    pub fn check_trips(&self, trips: &[Trip]) -> EngineResult<()> {
        let limits = self.limits();

        if trips.len() > limits.max_trips {
            return Err(EngineError::TooManyTrips {
                count: trips.len(),
                max: limits.max_trips,
            });
        }

        for (index, trip) in trips.iter().enumerate() {
            let days = trip.length_days();
            if days > limits.max_trip_days {
                return Err(EngineError::TripTooLong {
                    index,
                    days,
                    max: limits.max_trip_days,
                });
            }
        }

        let earliest_entry = trips.iter().map(|trip| trip.entry_date).min();
        let latest_exit = trips.iter().map(|trip| trip.exit_date).max();
        if let (Some(earliest_entry), Some(latest_exit)) = (earliest_entry, latest_exit) {
            let days = (latest_exit - earliest_entry).num_days() + 1;
            if days > limits.max_span_days {
                return Err(EngineError::SpanTooWide {
                    earliest_entry,
                    latest_exit,
                    days,
                    max: limits.max_span_days,
                });
            }
        }

        Ok(())
    }
}
