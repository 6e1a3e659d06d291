//! Daily pay breakdown model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The money owed for one day, split by component.
///
/// `daily_total` is always the sum of the six components. The fields are
/// only readable; a breakdown is built once through [`DailyPayBreakdown::new`].
///
/// # Example
///
/// ```
/// use timesheet_engine::models::DailyPayBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let breakdown = DailyPayBreakdown::new(
///     dec("0"),      // overtime
///     dec("38.72"),  // penalty
///     dec("0"),      // special loading
///     dec("0"),      // sick
///     dec("398.55"), // ordinary
///     dec("0"),      // weekend loading
/// );
/// assert_eq!(breakdown.daily_total(), dec("437.27"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyPayBreakdown {
    overtime_total: Decimal,
    penalty_pay: Decimal,
    special_loading_pay: Decimal,
    sick_pay: Decimal,
    ordinary_base_pay: Decimal,
    weekend_loading_pay: Decimal,
    daily_total: Decimal,
}

impl DailyPayBreakdown {
    /// Builds a breakdown, computing the daily total from the components.
    pub fn new(
        overtime_total: Decimal,
        penalty_pay: Decimal,
        special_loading_pay: Decimal,
        sick_pay: Decimal,
        ordinary_base_pay: Decimal,
        weekend_loading_pay: Decimal,
    ) -> Self {
        let daily_total = overtime_total
            + penalty_pay
            + special_loading_pay
            + sick_pay
            + ordinary_base_pay
            + weekend_loading_pay;

        Self {
            overtime_total,
            penalty_pay,
            special_loading_pay,
            sick_pay,
            ordinary_base_pay,
            weekend_loading_pay,
            daily_total,
        }
    }

    /// A breakdown with every component at zero.
    pub fn zero() -> Self {
        Self::new(
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        )
    }

    /// Overtime pay plus WOBOD pay.
    pub fn overtime_total(&self) -> Decimal {
        self.overtime_total
    }

    /// Afternoon, night or morning shift penalty.
    pub fn penalty_pay(&self) -> Decimal {
        self.penalty_pay
    }

    /// Flat special loading.
    pub fn special_loading_pay(&self) -> Decimal {
        self.special_loading_pay
    }

    /// Sick with certificate pay.
    pub fn sick_pay(&self) -> Decimal {
        self.sick_pay
    }

    /// Ordinary hours pay, or the ADO adjustment on an ADO day.
    pub fn ordinary_base_pay(&self) -> Decimal {
        self.ordinary_base_pay
    }

    /// Saturday and Sunday loading.
    pub fn weekend_loading_pay(&self) -> Decimal {
        self.weekend_loading_pay
    }

    /// Sum of all components.
    pub fn daily_total(&self) -> Decimal {
        self.daily_total
    }
}
