//! Request types for the timesheet engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::BaseRates;
use crate::models::{DayEntry, PublicHoliday, PublicHolidayCalendar, ShiftInput};

/// Request body for the `/calculate` endpoint.
///
/// Only `days` is required. Base rates and public holidays fall back to the
/// server's configuration when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Base rates to price this request with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_rates: Option<BaseRates>,
    /// Public holidays to check the days against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_holidays: Option<Vec<PublicHolidayRequest>>,
    /// The timesheet days, at most fourteen.
    pub days: Vec<DayEntry>,
}

impl CalculationRequest {
    /// Converts the raw day entries into shift inputs.
    pub fn shift_inputs(&self) -> Vec<ShiftInput> {
        self.days.iter().cloned().map(ShiftInput::from).collect()
    }

    /// The request's holiday calendar, if it supplied one.
    pub fn holiday_calendar(&self) -> Option<PublicHolidayCalendar> {
        self.public_holidays.as_ref().map(|holidays| {
            PublicHolidayCalendar::new(holidays.iter().cloned().map(Into::into).collect())
        })
    }
}

/// Public holiday information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicHolidayRequest {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
    /// The region where this holiday applies.
    #[serde(default)]
    pub region: String,
}

impl From<PublicHolidayRequest> for PublicHoliday {
    fn from(req: PublicHolidayRequest) -> Self {
        PublicHoliday {
            date: req.date,
            name: req.name,
            region: req.region,
        }
    }
}
