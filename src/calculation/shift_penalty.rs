//! Shift penalty and special loading calculation.
//!
//! A shift penalty pays a flat hourly amount for every *whole* hour worked
//! on an afternoon, night or early-morning shift. The special loading is a
//! single flat amount per day, not scaled by hours.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AuditStep, PenaltyType};

use super::rate_table::{RateName, RateTable};
use super::rounding::round_money;

/// The result of calculating a shift penalty.
#[derive(Debug, Clone)]
pub struct ShiftPenaltyResult {
    /// The whole hours the penalty was paid on.
    pub penalty_hours: Decimal,
    /// The penalty amount, rounded to cents.
    pub penalty_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of calculating the special loading.
#[derive(Debug, Clone)]
pub struct SpecialLoadingResult {
    /// The loading amount, rounded to cents.
    pub special_loading_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The rate table entry priced by a penalty type.
pub fn penalty_rate_name(penalty_type: PenaltyType) -> Option<RateName> {
    match penalty_type {
        PenaltyType::None => None,
        PenaltyType::Afternoon => Some(RateName::AfternoonShift),
        PenaltyType::Night => Some(RateName::NightShift),
        PenaltyType::Morning => Some(RateName::EarlyMorning),
    }
}

/// Calculates the shift penalty for a day.
///
/// The worked hours are floored before the rate is applied, so a trailing
/// fractional hour earns no penalty.
///
/// # Errors
///
/// Returns [`EngineError::MissingRate`](crate::error::EngineError::MissingRate)
/// if the selected penalty's rate is absent from the table.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::calculate_shift_penalty;
/// use timesheet_engine::config::BaseRates;
/// use timesheet_engine::calculation::build_rate_table;
/// use timesheet_engine::models::PenaltyType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = build_rate_table(&BaseRates::default());
/// let worked = Decimal::from_str("7.75").unwrap();
///
/// let result = calculate_shift_penalty(PenaltyType::Night, worked, &rates, 1).unwrap();
/// // floor(7.75) = 7h × $5.69
/// assert_eq!(result.penalty_pay, Decimal::from_str("39.83").unwrap());
/// ```
pub fn calculate_shift_penalty(
    penalty_type: PenaltyType,
    worked_hours: Decimal,
    rates: &RateTable,
    step_number: u32,
) -> EngineResult<ShiftPenaltyResult> {
    let Some(rate_name) = penalty_rate_name(penalty_type) else {
        return Ok(ShiftPenaltyResult {
            penalty_hours: Decimal::ZERO,
            penalty_pay: Decimal::ZERO,
            audit_step: AuditStep {
                step_number,
                rule_id: "shift_penalty".to_string(),
                rule_name: "Shift Penalty".to_string(),
                rate_ref: None,
                input: serde_json::json!({
                    "penalty_type": penalty_type,
                    "worked_hours": worked_hours.normalize().to_string()
                }),
                output: serde_json::json!({
                    "penalty_pay": "0.00"
                }),
                reasoning: "No shift penalty selected".to_string(),
            },
        });
    };

    let rate = rates.get(rate_name)?;
    let penalty_hours = worked_hours.floor();
    let penalty_pay = round_money(penalty_hours * rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: "shift_penalty".to_string(),
        rule_name: "Shift Penalty".to_string(),
        rate_ref: Some(rate_name.key().to_string()),
        input: serde_json::json!({
            "penalty_type": penalty_type,
            "worked_hours": worked_hours.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "penalty_hours": penalty_hours.normalize().to_string(),
            "penalty_pay": penalty_pay.to_string()
        }),
        reasoning: format!(
            "{} penalty: {} whole hours × ${} = ${}",
            penalty_type,
            penalty_hours.normalize(),
            rate.normalize(),
            penalty_pay
        ),
    };

    Ok(ShiftPenaltyResult {
        penalty_hours,
        penalty_pay,
        audit_step,
    })
}

/// Calculates the flat special loading for a day.
///
/// # Errors
///
/// Returns [`EngineError::MissingRate`](crate::error::EngineError::MissingRate)
/// if the loading applies and its rate is absent from the table.
pub fn calculate_special_loading(
    special_loading: bool,
    rates: &RateTable,
    step_number: u32,
) -> EngineResult<SpecialLoadingResult> {
    if !special_loading {
        return Ok(SpecialLoadingResult {
            special_loading_pay: Decimal::ZERO,
            audit_step: AuditStep {
                step_number,
                rule_id: "special_loading".to_string(),
                rule_name: "Special Loading".to_string(),
                rate_ref: None,
                input: serde_json::json!({ "special_loading": false }),
                output: serde_json::json!({ "special_loading_pay": "0.00" }),
                reasoning: "Special loading not selected".to_string(),
            },
        });
    }

    let rate = rates.get(RateName::SpecialLoading)?;
    let special_loading_pay = round_money(rate);

    Ok(SpecialLoadingResult {
        special_loading_pay,
        audit_step: AuditStep {
            step_number,
            rule_id: "special_loading".to_string(),
            rule_name: "Special Loading".to_string(),
            rate_ref: Some(RateName::SpecialLoading.key().to_string()),
            input: serde_json::json!({
                "special_loading": true,
                "rate": rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "special_loading_pay": special_loading_pay.to_string()
            }),
            reasoning: format!("Flat special loading of ${}", special_loading_pay),
        },
    })
}
