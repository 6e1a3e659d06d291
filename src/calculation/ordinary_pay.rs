//! Ordinary base pay calculation.
//!
//! Rules, in order:
//!
//! - ADO: a fixed four hours at the ADO adjustment rate
//! - OFF: nothing
//! - Worked on an overtime shift: nothing, the hours are paid as overtime
//! - Worked: worked hours × ordinary rate

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AuditStep, DayStatus};

use super::rate_table::{RateName, RateTable};
use super::rounding::round_money;

/// Hours paid for an accrued day off.
pub const ADO_ADJUSTMENT_HOURS: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// The result of calculating ordinary base pay.
#[derive(Debug, Clone)]
pub struct OrdinaryPayResult {
    /// The hours paid.
    pub paid_hours: Decimal,
    /// The ordinary base pay, rounded to cents.
    pub ordinary_base_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates ordinary base pay for a day.
///
/// # Arguments
///
/// * `status` - The resolved OFF/ADO status of the day
/// * `worked_hours` - Hours worked, already defaulted when unknown
/// * `ot_enabled` - Whether the day is an overtime shift
/// * `rates` - The rate table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::MissingRate`](crate::error::EngineError::MissingRate)
/// if the rate the day is priced against is absent from the table.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{build_rate_table, calculate_ordinary_pay};
/// use timesheet_engine::config::BaseRates;
/// use timesheet_engine::models::DayStatus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = build_rate_table(&BaseRates::default());
///
/// let ado = calculate_ordinary_pay(DayStatus::Ado, Decimal::from(8), false, &rates, 1).unwrap();
/// // 4h × $49.81842 = $199.27368
/// assert_eq!(ado.ordinary_base_pay, Decimal::from_str("199.27").unwrap());
/// ```
pub fn calculate_ordinary_pay(
    status: DayStatus,
    worked_hours: Decimal,
    ot_enabled: bool,
    rates: &RateTable,
    step_number: u32,
) -> EngineResult<OrdinaryPayResult> {
    let (paid_hours, rate_name, reasoning_prefix) = match status {
        DayStatus::Ado => (
            ADO_ADJUSTMENT_HOURS,
            Some(RateName::AdoAdjustment),
            "ADO adjustment",
        ),
        DayStatus::Off => (Decimal::ZERO, None, "Rostered OFF, no ordinary pay"),
        DayStatus::Worked if ot_enabled => (
            Decimal::ZERO,
            None,
            "Overtime shift, ordinary pay suppressed",
        ),
        DayStatus::Worked => (worked_hours, Some(RateName::OrdinaryHours), "Ordinary hours"),
    };

    let Some(rate_name) = rate_name else {
        return Ok(OrdinaryPayResult {
            paid_hours,
            ordinary_base_pay: Decimal::ZERO,
            audit_step: AuditStep {
                step_number,
                rule_id: "ordinary_pay".to_string(),
                rule_name: "Ordinary Base Pay".to_string(),
                rate_ref: None,
                input: serde_json::json!({
                    "status": status,
                    "worked_hours": worked_hours.normalize().to_string(),
                    "ot_enabled": ot_enabled
                }),
                output: serde_json::json!({ "ordinary_base_pay": "0.00" }),
                reasoning: reasoning_prefix.to_string(),
            },
        });
    };

    let rate = rates.get(rate_name)?;
    let ordinary_base_pay = round_money(paid_hours * rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: "ordinary_pay".to_string(),
        rule_name: "Ordinary Base Pay".to_string(),
        rate_ref: Some(rate_name.key().to_string()),
        input: serde_json::json!({
            "status": status,
            "worked_hours": worked_hours.normalize().to_string(),
            "ot_enabled": ot_enabled,
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "paid_hours": paid_hours.normalize().to_string(),
            "ordinary_base_pay": ordinary_base_pay.to_string()
        }),
        reasoning: format!(
            "{}: {} hours × ${} = ${}",
            reasoning_prefix,
            paid_hours.round_dp(2).normalize(),
            rate.normalize(),
            ordinary_base_pay
        ),
    };

    Ok(OrdinaryPayResult {
        paid_hours,
        ordinary_base_pay,
        audit_step,
    })
}
