//! Rounding helpers shared by the rate table and the pay rules.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for rate table entries.
pub const RATE_DECIMAL_PLACES: u32 = 5;

/// Decimal places kept for monetary amounts.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a rate table entry to 5 decimal places.
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a monetary amount to cents.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(7472763, 5)), Decimal::new(7473, 2));
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an hour count to 2 decimal places.
pub fn round_hours(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
