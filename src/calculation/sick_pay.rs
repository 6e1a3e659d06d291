//! Sick pay calculation.
//!
//! A sick day with a certificate pays a flat eight hours at the
//! sick-with-certificate rate, whatever was worked and whatever the day's
//! OFF/ADO status.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::AuditStep;

use super::rate_table::{RateName, RateTable};
use super::rounding::round_money;

/// Hours paid for a sick day.
pub const SICK_PAY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The result of calculating sick pay.
#[derive(Debug, Clone)]
pub struct SickPayResult {
    /// The sick pay amount, rounded to cents.
    pub sick_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates sick pay for a day.
///
/// # Errors
///
/// Returns [`EngineError::MissingRate`](crate::error::EngineError::MissingRate)
/// if the day is sick and the sick rate is absent from the table.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{build_rate_table, calculate_sick_pay};
/// use timesheet_engine::config::BaseRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = build_rate_table(&BaseRates::default());
/// let result = calculate_sick_pay(true, &rates, 1).unwrap();
/// // 8h × $49.81842 = $398.54736
/// assert_eq!(result.sick_pay, Decimal::from_str("398.55").unwrap());
/// ```
pub fn calculate_sick_pay(
    sick: bool,
    rates: &RateTable,
    step_number: u32,
) -> EngineResult<SickPayResult> {
    if !sick {
        return Ok(SickPayResult {
            sick_pay: Decimal::ZERO,
            audit_step: AuditStep {
                step_number,
                rule_id: "sick_pay".to_string(),
                rule_name: "Sick Pay".to_string(),
                rate_ref: None,
                input: serde_json::json!({ "sick": false }),
                output: serde_json::json!({ "sick_pay": "0.00" }),
                reasoning: "Not a sick day".to_string(),
            },
        });
    }

    let rate = rates.get(RateName::SickWithCertificate)?;
    let sick_pay = round_money(SICK_PAY_HOURS * rate);

    Ok(SickPayResult {
        sick_pay,
        audit_step: AuditStep {
            step_number,
            rule_id: "sick_pay".to_string(),
            rule_name: "Sick Pay".to_string(),
            rate_ref: Some(RateName::SickWithCertificate.key().to_string()),
            input: serde_json::json!({
                "sick": true,
                "hours": SICK_PAY_HOURS.to_string(),
                "rate": rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "sick_pay": sick_pay.to_string()
            }),
            reasoning: format!(
                "Sick with certificate: {} hours × ${} = ${}",
                SICK_PAY_HOURS,
                rate.normalize(),
                sick_pay
            ),
        },
    })
}
