//! Application state for the timesheet engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::RateTable;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and the rate table derived from its base
/// rates, built once at startup. Requests that supply their own base rates
/// build a fresh table instead.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// The rate table for the configured base rates.
    rate_table: Arc<RateTable>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let rate_table = config.rate_table();
        Self {
            config: Arc::new(config),
            rate_table: Arc::new(rate_table),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the rate table for the configured base rates.
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }
}
