//! Daily pay calculation.
//!
//! Combines the individual pay rules into one [`DailyPayBreakdown`] for a
//! single day. Every rule records an audit step, numbered in the order the
//! rules are applied.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, DailyPayBreakdown, DayStatus, ShiftInput};

use super::components::{ComponentBuckets, aggregate_components};
use super::day_detection::{DayType, ShiftSegment, segment_by_midnight};
use super::ordinary_pay::calculate_ordinary_pay;
use super::overtime::{OvertimePortion, OvertimeResult, calculate_overtime};
use super::rate_table::{RateName, RateTable};
use super::shift_penalty::{calculate_shift_penalty, calculate_special_loading};
use super::sick_pay::calculate_sick_pay;
use super::weekend_loading::calculate_weekend_loading;

/// The full result of a daily calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCalculation {
    /// The calendar date of the day.
    pub date: NaiveDate,
    /// The day-of-week label the day was entered under.
    pub day_label: Weekday,
    /// The resolved OFF/ADO status.
    pub status: DayStatus,
    /// Hours worked, after defaults.
    pub worked_hours: Decimal,
    /// Hours by day type and night window.
    pub components: ComponentBuckets,
    /// Overtime figures, zero unless the day is an overtime shift.
    pub overtime: OvertimeResult,
    /// The pay breakdown.
    pub breakdown: DailyPayBreakdown,
    /// Audit steps in application order.
    pub audit_steps: Vec<AuditStep>,
}

/// Splits the day's clock times at midnight.
///
/// Returns `None` when either clock time is missing. Equal clock times give
/// an empty window, not a missing one.
fn shift_segments(input: &ShiftInput) -> Option<Vec<ShiftSegment>> {
    input
        .shift_window()
        .map(|(start, end)| segment_by_midnight(start, end))
}

/// Calculates the pay breakdown for one day.
///
/// Rules are applied in this order, each contributing one breakdown field:
///
/// 1. Shift penalty on whole worked hours
/// 2. Flat special loading
/// 3. Flat eight-hour sick pay, independent of OFF/ADO
/// 4. Ordinary base pay, or the four-hour ADO adjustment
/// 5. Weekend loading from the midnight-split hours
/// 6. Overtime and WOBOD, on overtime shifts that are not OFF/ADO
///
/// Without both clock times, the worked hours are treated as one block on
/// the day's own label.
///
/// # Errors
///
/// Returns [`EngineError::MissingRate`](crate::error::EngineError::MissingRate)
/// if a rule needs a rate that is absent from the table.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{build_rate_table, calculate_daily_pay};
/// use timesheet_engine::config::BaseRates;
/// use timesheet_engine::models::ShiftInput;
/// use chrono::{NaiveDate, NaiveTime, Weekday};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = build_rate_table(&BaseRates::default());
/// let mut input = ShiftInput::new(Weekday::Mon, NaiveDate::from_ymd_opt(2025, 11, 17).unwrap());
/// input.clock_in = NaiveTime::from_hms_opt(7, 0, 0);
/// input.clock_out = NaiveTime::from_hms_opt(15, 0, 0);
///
/// let day = calculate_daily_pay(&input, &rates).unwrap();
/// // 8h × $49.81842
/// assert_eq!(day.breakdown.daily_total(), Decimal::from_str("398.55").unwrap());
/// ```
pub fn calculate_daily_pay(input: &ShiftInput, rates: &RateTable) -> EngineResult<DailyCalculation> {
    let status = input.status();
    let worked_hours = input.worked_hours();
    let ot_enabled = input.overtime.ot_enabled;
    let mut audit_steps = Vec::new();
    let mut step_number: u32 = 1;

    let penalty = calculate_shift_penalty(input.penalty_type, worked_hours, rates, step_number)?;
    audit_steps.push(penalty.audit_step);
    step_number += 1;

    let special = calculate_special_loading(input.special_loading, rates, step_number)?;
    audit_steps.push(special.audit_step);
    step_number += 1;

    let sick = calculate_sick_pay(input.sick, rates, step_number)?;
    audit_steps.push(sick.audit_step);
    step_number += 1;

    let ordinary = calculate_ordinary_pay(status, worked_hours, ot_enabled, rates, step_number)?;
    audit_steps.push(ordinary.audit_step);
    step_number += 1;

    let segments = shift_segments(input);
    let (components, loading_buckets) = match &segments {
        Some(segments) => {
            let components = aggregate_components(segments);
            let rounded = components.rounded_hours();
            (components, rounded)
        }
        None => {
            let components =
                ComponentBuckets::whole_day(DayType::from(input.day_label), worked_hours);
            (components.clone(), components)
        }
    };

    let weekend_suppressed = status != DayStatus::Worked || ot_enabled;
    let weekend =
        calculate_weekend_loading(&loading_buckets, weekend_suppressed, rates, step_number)?;
    audit_steps.push(weekend.audit_step);
    step_number += 1;

    let overtime = if ot_enabled && status == DayStatus::Worked {
        let portions: Vec<OvertimePortion> = match &segments {
            Some(segments) => segments.iter().map(OvertimePortion::from).collect(),
            None => vec![OvertimePortion {
                day_type: DayType::from(input.day_label),
                hours: worked_hours,
            }],
        };

        let ordinary_rate = rates.get(RateName::OrdinaryHours)?;
        let calculation = calculate_overtime(
            &portions,
            ordinary_rate,
            input.overtime.wobod_enabled,
            step_number,
        );
        audit_steps.extend(calculation.audit_steps);
        calculation.result
    } else {
        OvertimeResult::default()
    };

    let breakdown = DailyPayBreakdown::new(
        overtime.total(),
        penalty.penalty_pay,
        special.special_loading_pay,
        sick.sick_pay,
        ordinary.ordinary_base_pay,
        weekend.weekend_loading_pay,
    );

    debug!(
        date = %input.date,
        day = %input.day_label,
        status = %status,
        worked_hours = %worked_hours,
        daily_total = %breakdown.daily_total(),
        "Calculated daily pay"
    );

    Ok(DailyCalculation {
        date: input.date,
        day_label: input.day_label,
        status,
        worked_hours,
        components,
        overtime,
        breakdown,
        audit_steps,
    })
}
