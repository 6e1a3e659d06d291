//! Shift input model and related types.
//!
//! A [`ShiftInput`] is the typed record for one calendar day of a
//! fortnight: clock times, worked duration and the day's flags.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::hours_between;

/// Worked hours assumed when neither a duration nor clock times are usable.
pub const DEFAULT_WORKED_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The shift penalty selected for a day.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::PenaltyType;
///
/// assert_eq!(PenaltyType::from_selector("Night"), PenaltyType::Night);
/// assert_eq!(PenaltyType::from_selector(""), PenaltyType::None);
/// assert_eq!(PenaltyType::from_selector("Evening"), PenaltyType::None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyType {
    /// No penalty applies.
    #[default]
    None,
    /// Afternoon shift penalty.
    Afternoon,
    /// Night shift penalty.
    Night,
    /// Early morning shift penalty.
    Morning,
}

impl PenaltyType {
    /// Interprets a free-text selector. Unknown or blank selectors mean no penalty.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "afternoon" => PenaltyType::Afternoon,
            "night" => PenaltyType::Night,
            "morning" => PenaltyType::Morning,
            _ => PenaltyType::None,
        }
    }
}

impl std::fmt::Display for PenaltyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PenaltyType::None => write!(f, "None"),
            PenaltyType::Afternoon => write!(f, "Afternoon"),
            PenaltyType::Night => write!(f, "Night"),
            PenaltyType::Morning => write!(f, "Morning"),
        }
    }
}

/// Overtime switches for a day, passed alongside the rate table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeOptions {
    /// Pays the whole shift as overtime instead of ordinary time plus loading.
    #[serde(default)]
    pub ot_enabled: bool,
    /// Adds the WOBOD bonus on top of overtime hours.
    #[serde(default)]
    pub wobod_enabled: bool,
}

/// How a day is treated once the OFF/ADO flags have been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// A normal working day.
    Worked,
    /// A rostered day off.
    Off,
    /// An accrued day off.
    Ado,
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Worked => write!(f, "Worked"),
            DayStatus::Off => write!(f, "OFF"),
            DayStatus::Ado => write!(f, "ADO"),
        }
    }
}

/// The typed record for one day of a timesheet.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{DayStatus, ShiftInput};
/// use chrono::{NaiveDate, NaiveTime, Weekday};
/// use rust_decimal::Decimal;
///
/// let mut input = ShiftInput::new(Weekday::Sat, NaiveDate::from_ymd_opt(2025, 11, 15).unwrap());
/// input.clock_in = NaiveTime::from_hms_opt(19, 0, 0);
/// input.clock_out = NaiveTime::from_hms_opt(2, 33, 0);
///
/// assert_eq!(input.status(), DayStatus::Worked);
/// assert_eq!(input.worked_hours(), Decimal::new(755, 2)); // 7.55 hours
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInput {
    /// The day-of-week label the day was entered under.
    pub day_label: Weekday,
    /// The calendar date of the day.
    pub date: NaiveDate,
    /// Actual clock-on time, if known.
    #[serde(default)]
    pub clock_in: Option<NaiveTime>,
    /// Actual clock-off time, if known. Earlier than `clock_in` means the next day.
    #[serde(default)]
    pub clock_out: Option<NaiveTime>,
    /// Explicit worked duration in decimal hours.
    #[serde(default)]
    pub worked_duration: Option<Decimal>,
    /// Sick with certificate.
    #[serde(default)]
    pub sick: bool,
    /// Rostered off.
    #[serde(default)]
    pub off: bool,
    /// Accrued day off.
    #[serde(default)]
    pub ado: bool,
    /// Shift penalty selection.
    #[serde(default)]
    pub penalty_type: PenaltyType,
    /// Whether the flat special loading applies.
    #[serde(default)]
    pub special_loading: bool,
    /// Overtime switches for the day.
    #[serde(default)]
    pub overtime: OvertimeOptions,
}

impl ShiftInput {
    /// Creates an empty day with every flag cleared.
    pub fn new(day_label: Weekday, date: NaiveDate) -> Self {
        Self {
            day_label,
            date,
            clock_in: None,
            clock_out: None,
            worked_duration: None,
            sick: false,
            off: false,
            ado: false,
            penalty_type: PenaltyType::None,
            special_loading: false,
            overtime: OvertimeOptions::default(),
        }
    }

    /// Resolves the OFF/ADO flags. ADO takes precedence over OFF.
    pub fn status(&self) -> DayStatus {
        if self.ado {
            DayStatus::Ado
        } else if self.off {
            DayStatus::Off
        } else {
            DayStatus::Worked
        }
    }

    /// Returns the shift's start and end timestamps.
    ///
    /// A clock-off earlier than the clock-on is moved to the following day.
    /// Returns `None` unless both clock times are present.
    pub fn shift_window(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let clock_in = self.clock_in?;
        let clock_out = self.clock_out?;

        let start = self.date.and_time(clock_in);
        let mut end = self.date.and_time(clock_out);
        if clock_out < clock_in {
            end += Duration::days(1);
        }

        Some((start, end))
    }

    /// Returns the hours worked for the day.
    ///
    /// Uses the explicit duration when positive, then the clock span when
    /// positive, and otherwise [`DEFAULT_WORKED_HOURS`].
    pub fn worked_hours(&self) -> Decimal {
        if let Some(duration) = self.worked_duration.filter(|d| *d > Decimal::ZERO) {
            return duration;
        }

        self.shift_window()
            .map(|(start, end)| hours_between(start, end))
            .filter(|hours| *hours > Decimal::ZERO)
            .unwrap_or(DEFAULT_WORKED_HOURS)
    }
}
