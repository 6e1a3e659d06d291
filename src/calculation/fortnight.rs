//! Fortnight aggregation.
//!
//! Each day of a pay period is calculated independently against the same
//! rate table, then the breakdowns are summed field by field.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditWarning, FORTNIGHT_DAYS, PayPeriodTotals, PublicHolidayCalendar, ShiftInput,
};

use super::daily_pay::{DailyCalculation, calculate_daily_pay};
use super::rate_table::RateTable;

/// Warning code for a day that falls on a public holiday.
pub const PUBLIC_HOLIDAY_NOT_APPLIED: &str = "PUBLIC_HOLIDAY_NOT_APPLIED";

/// The result of calculating a pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortnightCalculation {
    /// Each day's calculation, in input order.
    pub days: Vec<DailyCalculation>,
    /// Field-by-field totals across the days.
    pub totals: PayPeriodTotals,
    /// Warnings raised while calculating.
    pub warnings: Vec<AuditWarning>,
}

impl FortnightCalculation {
    /// The total pay for the period.
    pub fn total(&self) -> Decimal {
        self.totals.total
    }
}

fn validate_days(days: &[ShiftInput]) -> EngineResult<()> {
    if days.len() > FORTNIGHT_DAYS {
        return Err(EngineError::InvalidPayPeriod {
            message: format!(
                "a pay period has at most {} days, got {}",
                FORTNIGHT_DAYS,
                days.len()
            ),
        });
    }

    let mut seen = BTreeSet::new();
    for day in days {
        if !seen.insert(day.date) {
            return Err(EngineError::InvalidPayPeriod {
                message: format!("date {} appears more than once", day.date),
            });
        }
    }

    Ok(())
}

/// Calculates every day of a pay period and sums the results.
///
/// Days on a public holiday are paid at their normal weekday, Saturday or
/// Sunday rates; a [`PUBLIC_HOLIDAY_NOT_APPLIED`] warning is attached so the
/// caller can review them.
///
/// # Errors
///
/// - [`EngineError::InvalidPayPeriod`] for more than 14 days or a repeated date
/// - [`EngineError::MissingRate`] if any day needs a rate absent from the table
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{build_rate_table, calculate_fortnight};
/// use timesheet_engine::config::BaseRates;
/// use timesheet_engine::models::{PublicHolidayCalendar, ShiftInput};
/// use chrono::{Datelike, NaiveDate};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = build_rate_table(&BaseRates::default());
/// let start = NaiveDate::from_ymd_opt(2025, 11, 17).unwrap();
/// let days: Vec<ShiftInput> = start
///     .iter_days()
///     .take(5)
///     .map(|date| ShiftInput::new(date.weekday(), date))
///     .collect();
///
/// let fortnight = calculate_fortnight(&days, &rates, &PublicHolidayCalendar::default()).unwrap();
/// // 5 days × 8h × $49.81842, each day rounded to $398.55
/// assert_eq!(fortnight.total(), Decimal::from_str("1992.75").unwrap());
/// ```
pub fn calculate_fortnight(
    days: &[ShiftInput],
    rates: &RateTable,
    holidays: &PublicHolidayCalendar,
) -> EngineResult<FortnightCalculation> {
    validate_days(days)?;

    let mut warnings = Vec::new();
    for day in days {
        if let Some(holiday) = holidays.get(day.date) {
            warn!(
                date = %day.date,
                holiday = %holiday.name,
                "Shift falls on a public holiday; holiday rates are not applied"
            );
            warnings.push(AuditWarning {
                code: PUBLIC_HOLIDAY_NOT_APPLIED.to_string(),
                message: format!(
                    "{} is {} ({}); paid at ordinary day rates",
                    day.date, holiday.name, holiday.region
                ),
                severity: "medium".to_string(),
            });
        }
    }

    let days = days
        .iter()
        .map(|day| calculate_daily_pay(day, rates))
        .collect::<EngineResult<Vec<_>>>()?;

    let totals: PayPeriodTotals = days.iter().map(|day| &day.breakdown).sum();

    Ok(FortnightCalculation {
        days,
        totals,
        warnings,
    })
}
