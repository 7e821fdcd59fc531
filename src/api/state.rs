//! Application state for the Stay Allowance Engine API.
//!
//! The only shared state is the loaded configuration. Trip collections are
//! owned by callers and arrive with each request.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
