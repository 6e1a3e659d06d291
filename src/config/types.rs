//! Configuration types for the timesheet engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PublicHoliday, PublicHolidayCalendar};

/// The three user-supplied rates every other rate is derived from.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::BaseRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base = BaseRates::default();
/// assert_eq!(base.ordinary, Decimal::from_str("49.81842").unwrap());
/// assert!(base.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRates {
    /// The ordinary hourly rate.
    pub ordinary: Decimal,
    /// The afternoon (and early morning) shift penalty, per hour.
    pub afternoon_penalty: Decimal,
    /// The night shift penalty, per hour.
    pub night_penalty: Decimal,
}

impl Default for BaseRates {
    fn default() -> Self {
        Self {
            ordinary: Decimal::new(4_981_842, 5),
            afternoon_penalty: Decimal::new(484, 2),
            night_penalty: Decimal::new(569, 2),
        }
    }
}

impl BaseRates {
    /// Checks that no base rate is negative.
    ///
    /// Zero is accepted for every field.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("ordinary", self.ordinary),
            ("afternoon_penalty", self.afternoon_penalty),
            ("night_penalty", self.night_penalty),
        ];

        for (field, value) in fields {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidBaseRate {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        Ok(())
    }
}

/// Structure of `rates.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesFile {
    /// The configured base rates.
    pub base_rates: BaseRates,
}

/// A single holiday entry in `public_holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// ISO date of the holiday.
    pub date: String,
    /// Name of the holiday.
    pub name: String,
}

/// Structure of `public_holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicHolidaysFile {
    /// The region the calendar belongs to (e.g. "NSW").
    pub region: String,
    /// The holidays in the calendar.
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}

impl PublicHolidaysFile {
    /// Converts the raw entries into a calendar, rejecting malformed dates.
    pub fn into_calendar(self) -> Result<PublicHolidayCalendar, String> {
        let region = self.region;
        let holidays = self
            .holidays
            .into_iter()
            .map(|entry| {
                NaiveDate::from_str(&entry.date)
                    .map(|date| PublicHoliday {
                        date,
                        name: entry.name,
                        region: region.clone(),
                    })
                    .map_err(|e| format!("invalid holiday date '{}': {}", entry.date, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PublicHolidayCalendar::new(holidays))
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    base_rates: BaseRates,
    public_holidays: PublicHolidayCalendar,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(base_rates: BaseRates, public_holidays: PublicHolidayCalendar) -> Self {
        Self {
            base_rates,
            public_holidays,
        }
    }

    /// Returns the configured base rates.
    pub fn base_rates(&self) -> &BaseRates {
        &self.base_rates
    }

    /// Returns the public holiday calendar.
    pub fn public_holidays(&self) -> &PublicHolidayCalendar {
        &self.public_holidays
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(BaseRates::default(), PublicHolidayCalendar::default())
    }
}
