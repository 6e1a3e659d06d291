//! Calculation logic for the timesheet engine.
//!
//! This module turns a day's shift input into a pay breakdown: time and
//! duration parsing, the rate table, midnight segmentation and day
//! classification, hour buckets, and one file per pay rule. The daily
//! engine combines the rules and the fortnight engine sums the days.

mod components;
mod daily_pay;
mod day_detection;
mod fortnight;
mod ordinary_pay;
mod overtime;
mod rate_table;
mod rounding;
mod shift_penalty;
mod sick_pay;
mod time_parser;
mod weekend_loading;

pub use components::{
    ComponentBuckets, NIGHT_WINDOW_END, NIGHT_WINDOW_START, aggregate_components,
};
pub use daily_pay::{DailyCalculation, calculate_daily_pay};
pub use day_detection::{
    DayType, ShiftSegment, classify_date, get_day_type, hours_between, segment_by_midnight,
};
pub use fortnight::{FortnightCalculation, PUBLIC_HOLIDAY_NOT_APPLIED, calculate_fortnight};
pub use ordinary_pay::{ADO_ADJUSTMENT_HOURS, OrdinaryPayResult, calculate_ordinary_pay};
pub use overtime::{
    OvertimeCalculation, OvertimePortion, OvertimeResult, WOBOD_MULTIPLIER, calculate_overtime,
};
pub use rate_table::{RateName, RateTable, build_rate_table};
pub use rounding::{
    MONEY_DECIMAL_PLACES, RATE_DECIMAL_PLACES, round_hours, round_money, round_rate,
};
pub use shift_penalty::{
    ShiftPenaltyResult, SpecialLoadingResult, calculate_shift_penalty, calculate_special_loading,
    penalty_rate_name,
};
pub use sick_pay::{SICK_PAY_HOURS, SickPayResult, calculate_sick_pay};
pub use time_parser::{parse_duration, parse_time_of_day};
pub use weekend_loading::{WeekendLoadingResult, calculate_weekend_loading};
