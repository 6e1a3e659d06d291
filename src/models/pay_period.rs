//! Pay period totals and public holiday models.
//!
//! This module contains the [`PayPeriodTotals`] type used to sum daily
//! breakdowns across a fortnight, and the [`PublicHoliday`] calendar types.

use std::collections::BTreeMap;
use std::iter::Sum;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DailyPayBreakdown;

/// The number of days in a fortnightly pay period.
pub const FORTNIGHT_DAYS: usize = 14;

/// Represents a public holiday.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
///     name: "Christmas Day".to_string(),
///     region: "NSW".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Christmas Day").
    pub name: String,
    /// The region where this holiday applies (e.g., "NSW").
    pub region: String,
}

/// A set of public holidays keyed by date.
///
/// The calendar is informational: day classification does not consult it,
/// so a holiday is still paid as a weekday, Saturday or Sunday.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{PublicHoliday, PublicHolidayCalendar};
/// use chrono::NaiveDate;
///
/// let boxing_day = NaiveDate::from_ymd_opt(2025, 12, 26).unwrap();
/// let calendar = PublicHolidayCalendar::new(vec![PublicHoliday {
///     date: boxing_day,
///     name: "Boxing Day".to_string(),
///     region: "NSW".to_string(),
/// }]);
///
/// assert!(calendar.contains(boxing_day));
/// assert!(!calendar.contains(NaiveDate::from_ymd_opt(2025, 12, 27).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PublicHoliday>", into = "Vec<PublicHoliday>")]
pub struct PublicHolidayCalendar {
    holidays: BTreeMap<NaiveDate, PublicHoliday>,
}

impl PublicHolidayCalendar {
    /// Builds a calendar. A later entry for the same date replaces an earlier one.
    pub fn new(holidays: Vec<PublicHoliday>) -> Self {
        Self {
            holidays: holidays.into_iter().map(|h| (h.date, h)).collect(),
        }
    }

    /// Checks if the date is a public holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Returns the holiday on the given date, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&PublicHoliday> {
        self.holidays.get(&date)
    }

    /// Returns the number of holidays in the calendar.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true when the calendar holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterates holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = &PublicHoliday> {
        self.holidays.values()
    }
}

impl From<Vec<PublicHoliday>> for PublicHolidayCalendar {
    fn from(holidays: Vec<PublicHoliday>) -> Self {
        Self::new(holidays)
    }
}

impl From<PublicHolidayCalendar> for Vec<PublicHoliday> {
    fn from(calendar: PublicHolidayCalendar) -> Self {
        calendar.holidays.into_values().collect()
    }
}

/// Field-by-field sums of the daily breakdowns in a pay period.
///
/// Decimal addition is exact, so the totals do not depend on the order the
/// days are summed in.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{DailyPayBreakdown, PayPeriodTotals};
/// use rust_decimal::Decimal;
///
/// let days = vec![
///     DailyPayBreakdown::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::new(39855, 2), Decimal::ZERO),
///     DailyPayBreakdown::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::new(39855, 2), Decimal::ZERO),
/// ];
/// let totals: PayPeriodTotals = days.iter().sum();
/// assert_eq!(totals.total, Decimal::new(79710, 2));
/// assert_eq!(totals.days, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodTotals {
    /// Total overtime and WOBOD pay.
    pub overtime_total: Decimal,
    /// Total shift penalty pay.
    pub penalty_pay: Decimal,
    /// Total special loading pay.
    pub special_loading_pay: Decimal,
    /// Total sick pay.
    pub sick_pay: Decimal,
    /// Total ordinary pay including ADO adjustments.
    pub ordinary_base_pay: Decimal,
    /// Total weekend loading pay.
    pub weekend_loading_pay: Decimal,
    /// Sum of every daily total.
    pub total: Decimal,
    /// The number of days summed.
    pub days: usize,
}

impl PayPeriodTotals {
    /// Adds one day's breakdown to the totals.
    pub fn add(&mut self, breakdown: &DailyPayBreakdown) {
        self.overtime_total += breakdown.overtime_total();
        self.penalty_pay += breakdown.penalty_pay();
        self.special_loading_pay += breakdown.special_loading_pay();
        self.sick_pay += breakdown.sick_pay();
        self.ordinary_base_pay += breakdown.ordinary_base_pay();
        self.weekend_loading_pay += breakdown.weekend_loading_pay();
        self.total += breakdown.daily_total();
        self.days += 1;
    }
}

impl<'a> Sum<&'a DailyPayBreakdown> for PayPeriodTotals {
    fn sum<I: Iterator<Item = &'a DailyPayBreakdown>>(iter: I) -> Self {
        iter.fold(PayPeriodTotals::default(), |mut totals, breakdown| {
            totals.add(breakdown);
            totals
        })
    }
}
