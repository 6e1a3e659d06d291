//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::{RateTable, build_rate_table};
use crate::error::{EngineError, EngineResult};
use crate::models::PublicHolidayCalendar;

use super::types::{BaseRates, EngineConfig, PublicHolidaysFile, RatesFile};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── rates.yaml            # Ordinary, afternoon and night base rates
/// └── public_holidays.yaml  # Informational public holiday calendar
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let rates = loader.rate_table();
/// println!("{} rates derived", rates.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or holds a negative base rate.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timesheet_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), timesheet_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates_path = path.join("rates.yaml");
        let rates_file = Self::load_yaml::<RatesFile>(&rates_path)?;
        rates_file.base_rates.validate()?;

        let holidays_path = path.join("public_holidays.yaml");
        let holidays_file = Self::load_yaml::<PublicHolidaysFile>(&holidays_path)?;
        let public_holidays =
            holidays_file
                .into_calendar()
                .map_err(|message| EngineError::ConfigParseError {
                    path: holidays_path.display().to_string(),
                    message,
                })?;

        debug!(
            path = %path.display(),
            holidays = public_holidays.len(),
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(rates_file.base_rates, public_holidays),
        })
    }

    /// Wraps an in-memory configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
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

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the configured base rates.
    pub fn base_rates(&self) -> &BaseRates {
        self.config.base_rates()
    }

    /// Returns the public holiday calendar.
    pub fn public_holidays(&self) -> &PublicHolidayCalendar {
        self.config.public_holidays()
    }

    /// Builds the rate table for the configured base rates.
    pub fn rate_table(&self) -> RateTable {
        build_rate_table(self.config.base_rates())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}
