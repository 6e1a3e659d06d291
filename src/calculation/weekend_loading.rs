//! Weekend loading calculation.
//!
//! Saturday hours attract the Saturday loading (50% of ordinary) and Sunday
//! hours the Sunday loading (100% of ordinary). Hours come from the
//! midnight-split buckets, so a Saturday night shift running into Sunday is
//! loaded at each day's rate. Hours are priced as given; rounding segment
//! hours is left to the caller.
//!
//! No loading is paid on OFF or ADO days, or on overtime shifts where the
//! overtime multiplier already covers the weekend.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::AuditStep;

use super::components::ComponentBuckets;
use super::rate_table::{RateName, RateTable};
use super::rounding::round_money;

/// The result of calculating weekend loading.
#[derive(Debug, Clone)]
pub struct WeekendLoadingResult {
    /// Saturday hours that were loaded.
    pub saturday_hours: Decimal,
    /// Sunday hours that were loaded.
    pub sunday_hours: Decimal,
    /// The loading amount, rounded to cents.
    pub weekend_loading_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

fn loading_for(rates: &RateTable, name: RateName, hours: Decimal) -> EngineResult<Decimal> {
    if hours.is_zero() {
        return Ok(Decimal::ZERO);
    }
    Ok(hours * rates.get(name)?)
}

/// Calculates weekend loading from a day's hour buckets.
///
/// # Arguments
///
/// * `buckets` - The day's hours by day type
/// * `suppressed` - True for OFF/ADO days and overtime shifts
/// * `rates` - The rate table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::MissingRate`](crate::error::EngineError::MissingRate)
/// if weekend hours need a loading rate that is absent from the table.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{build_rate_table, calculate_weekend_loading, ComponentBuckets};
/// use timesheet_engine::config::BaseRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = build_rate_table(&BaseRates::default());
/// let buckets = ComponentBuckets {
///     saturday_hours: Decimal::from(5),
///     sunday_hours: Decimal::from_str("2.55").unwrap(),
///     ..ComponentBuckets::default()
/// };
///
/// let result = calculate_weekend_loading(&buckets, false, &rates, 1).unwrap();
/// // 5h × $24.90921 + 2.55h × $49.81842 = $251.583021
/// assert_eq!(result.weekend_loading_pay, Decimal::from_str("251.58").unwrap());
/// ```
pub fn calculate_weekend_loading(
    buckets: &ComponentBuckets,
    suppressed: bool,
    rates: &RateTable,
    step_number: u32,
) -> EngineResult<WeekendLoadingResult> {
    if suppressed {
        return Ok(WeekendLoadingResult {
            saturday_hours: Decimal::ZERO,
            sunday_hours: Decimal::ZERO,
            weekend_loading_pay: Decimal::ZERO,
            audit_step: AuditStep {
                step_number,
                rule_id: "weekend_loading".to_string(),
                rule_name: "Weekend Loading".to_string(),
                rate_ref: None,
                input: serde_json::json!({
                    "saturday_hours": buckets.saturday_hours.normalize().to_string(),
                    "sunday_hours": buckets.sunday_hours.normalize().to_string(),
                    "suppressed": true
                }),
                output: serde_json::json!({ "weekend_loading_pay": "0.00" }),
                reasoning: "Weekend loading not payable on OFF/ADO days or overtime shifts"
                    .to_string(),
            },
        });
    }

    let saturday_hours = buckets.saturday_hours;
    let sunday_hours = buckets.sunday_hours;

    let saturday_loading = loading_for(rates, RateName::SaturdayLoading, saturday_hours)?;
    let sunday_loading = loading_for(rates, RateName::SundayLoading, sunday_hours)?;
    let weekend_loading_pay = round_money(saturday_loading + sunday_loading);

    let rate_ref = match (saturday_hours.is_zero(), sunday_hours.is_zero()) {
        (true, true) => None,
        (false, true) => Some(RateName::SaturdayLoading.key().to_string()),
        (true, false) => Some(RateName::SundayLoading.key().to_string()),
        (false, false) => Some(format!(
            "{},{}",
            RateName::SaturdayLoading.key(),
            RateName::SundayLoading.key()
        )),
    };

    let reasoning = if rate_ref.is_none() {
        "No weekend hours".to_string()
    } else {
        format!(
            "Saturday {}h, Sunday {}h: weekend loading = ${}",
            saturday_hours.normalize(),
            sunday_hours.normalize(),
            weekend_loading_pay
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekend_loading".to_string(),
        rule_name: "Weekend Loading".to_string(),
        rate_ref,
        input: serde_json::json!({
            "saturday_hours": saturday_hours.normalize().to_string(),
            "sunday_hours": sunday_hours.normalize().to_string(),
            "suppressed": false
        }),
        output: serde_json::json!({
            "weekend_loading_pay": weekend_loading_pay.to_string()
        }),
        reasoning,
    };

    Ok(WeekendLoadingResult {
        saturday_hours,
        sunday_hours,
        weekend_loading_pay,
        audit_step,
    })
}
