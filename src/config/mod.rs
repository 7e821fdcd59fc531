//! Configuration loading and management for the Stay Allowance Engine.
//!
//! This module provides functionality to load engine configuration from YAML
//! files: rule metadata plus the request limits and display settings applied
//! by the HTTP API.
//!
//! # Example
//!
//! ```no_run
//! use stay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/schengen").unwrap();
//! println!("Loaded rule: {}", config.rule().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, LimitsConfig, RuleMetadata};
