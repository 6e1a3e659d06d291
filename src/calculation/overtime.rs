//! Overtime shift and WOBOD calculation.
//!
//! When a day is flagged as an overtime shift, each portion of the shift is
//! paid at the overtime uplift for the day it falls on:
//!
//! - Weekday: ordinary × (1.5 − 1)
//! - Saturday: ordinary × (2.0 − 1)
//! - Sunday: ordinary × (2.5 − 1)
//!
//! With WOBOD enabled every overtime hour also earns ordinary × 0.5.
//! Ordinary pay and weekend loading are suppressed for the day by the
//! caller, so these figures are the whole of the shift's time-based pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

use super::day_detection::{DayType, ShiftSegment};
use super::rate_table::RateName;
use super::rounding::round_money;

/// Share of ordinary time paid as the WOBOD bonus.
pub const WOBOD_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// A block of overtime hours worked on one day type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePortion {
    /// The day type the hours were worked on.
    pub day_type: DayType,
    /// The number of hours.
    pub hours: Decimal,
}

impl From<&ShiftSegment> for OvertimePortion {
    fn from(segment: &ShiftSegment) -> Self {
        Self {
            day_type: segment.day_type,
            hours: segment.hours,
        }
    }
}

/// Overtime totals for a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResult {
    /// Hours paid as overtime.
    pub ot_hours: Decimal,
    /// Overtime pay, rounded to cents.
    pub ot_pay: Decimal,
    /// WOBOD bonus, rounded to cents.
    pub wobod_pay: Decimal,
}

impl OvertimeResult {
    /// Overtime pay plus WOBOD pay.
    pub fn total(&self) -> Decimal {
        self.ot_pay + self.wobod_pay
    }
}

/// The result of an overtime calculation, including its audit steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvertimeCalculation {
    /// The overtime totals.
    pub result: OvertimeResult,
    /// One step for overtime and, when enabled, one for WOBOD.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates overtime and WOBOD pay for the portions of an overtime shift.
///
/// # Arguments
///
/// * `portions` - The shift's hours, split by day type
/// * `ordinary_rate` - The ordinary hourly rate
/// * `wobod_enabled` - Whether the WOBOD bonus applies
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{DayType, OvertimePortion, calculate_overtime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let portions = [OvertimePortion { day_type: DayType::Sunday, hours: Decimal::ONE }];
/// let ordinary = Decimal::from_str("49.81842").unwrap();
///
/// let calculation = calculate_overtime(&portions, ordinary, true, 1);
/// // 1h × $49.81842 × (2.5 − 1) = $74.72763
/// assert_eq!(calculation.result.ot_pay, Decimal::from_str("74.73").unwrap());
/// // 1h × $49.81842 × 0.5 = $24.90921
/// assert_eq!(calculation.result.wobod_pay, Decimal::from_str("24.91").unwrap());
/// ```
pub fn calculate_overtime(
    portions: &[OvertimePortion],
    ordinary_rate: Decimal,
    wobod_enabled: bool,
    step_number: u32,
) -> OvertimeCalculation {
    let mut ot_hours = Decimal::ZERO;
    let mut ot_pay = Decimal::ZERO;
    let mut wobod_pay = Decimal::ZERO;
    let mut breakdown = Vec::with_capacity(portions.len());

    for portion in portions {
        let multiplier = portion.day_type.overtime_multiplier();
        let uplift = portion.hours * ordinary_rate * (multiplier - Decimal::ONE);

        ot_hours += portion.hours;
        ot_pay += uplift;
        if wobod_enabled {
            wobod_pay += portion.hours * ordinary_rate * WOBOD_MULTIPLIER;
        }

        breakdown.push(format!(
            "{} {}h at {}%",
            portion.day_type,
            portion.hours.round_dp(2).normalize(),
            (multiplier * Decimal::ONE_HUNDRED).normalize()
        ));
    }

    let result = OvertimeResult {
        ot_hours,
        ot_pay: round_money(ot_pay),
        wobod_pay: round_money(wobod_pay),
    };

    let mut audit_steps = vec![AuditStep {
        step_number,
        rule_id: "overtime_shift".to_string(),
        rule_name: "Overtime Shift".to_string(),
        rate_ref: Some(RateName::OrdinaryHours.key().to_string()),
        input: serde_json::json!({
            "portions": portions,
            "ordinary_rate": ordinary_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "ot_hours": result.ot_hours.normalize().to_string(),
            "ot_pay": result.ot_pay.to_string()
        }),
        reasoning: format!(
            "Overtime shift ({}): uplift over ordinary ${} = ${}",
            if breakdown.is_empty() {
                "no hours".to_string()
            } else {
                breakdown.join(", ")
            },
            ordinary_rate.normalize(),
            result.ot_pay
        ),
    }];

    if wobod_enabled {
        audit_steps.push(AuditStep {
            step_number: step_number + 1,
            rule_id: "wobod".to_string(),
            rule_name: "WOBOD Bonus".to_string(),
            rate_ref: Some(RateName::OrdinaryHours.key().to_string()),
            input: serde_json::json!({
                "ot_hours": result.ot_hours.normalize().to_string(),
                "ordinary_rate": ordinary_rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "wobod_pay": result.wobod_pay.to_string()
            }),
            reasoning: format!(
                "WOBOD: {} hours × ${} × 50% = ${}",
                result.ot_hours.round_dp(2).normalize(),
                ordinary_rate.normalize(),
                result.wobod_pay
            ),
        });
    }

    OvertimeCalculation {
        result,
        audit_steps,
    }
}
