//! Configuration loading and management for the timesheet engine.
//!
//! This module loads the three base rates and the public holiday calendar
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Ordinary rate: {}", config.base_rates().ordinary);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BaseRates, EngineConfig, HolidayEntry, PublicHolidaysFile, RatesFile};
