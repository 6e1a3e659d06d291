//! Core data models for the timesheet engine.
//!
//! This module contains the domain models used throughout the engine.

mod audit;
mod day_entry;
mod pay_breakdown;
mod pay_period;
mod shift_input;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use day_entry::DayEntry;
pub use pay_breakdown::DailyPayBreakdown;
pub use pay_period::{FORTNIGHT_DAYS, PayPeriodTotals, PublicHoliday, PublicHolidayCalendar};
pub use shift_input::{
    DEFAULT_WORKED_HOURS, DayStatus, OvertimeOptions, PenaltyType, ShiftInput,
};
