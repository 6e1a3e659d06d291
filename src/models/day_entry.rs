//! Raw day entry as typed into a timesheet.
//!
//! A [`DayEntry`] holds free text for times and durations. Converting it to a
//! [`ShiftInput`] runs the text through the time parser; unparseable text
//! becomes an absent value rather than an error.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{parse_duration, parse_time_of_day};

use super::{OvertimeOptions, PenaltyType, ShiftInput};

/// One day of a timesheet as entered by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// The day-of-week label (e.g. "Monday").
    pub day: Weekday,
    /// The calendar date.
    pub date: NaiveDate,
    /// Rostered code; "OFF" or "ADO" mark the day accordingly.
    #[serde(default)]
    pub roster: String,
    /// Actual clock-on time ("HH:MM" or "730").
    #[serde(default)]
    pub clock_on: String,
    /// Actual clock-off time ("HH:MM" or "1845").
    #[serde(default)]
    pub clock_off: String,
    /// Worked duration ("H:MM" or "830").
    #[serde(default)]
    pub worked: String,
    /// Sick with certificate.
    #[serde(default)]
    pub sick: bool,
    /// Rostered off.
    #[serde(default)]
    pub off: bool,
    /// Accrued day off.
    #[serde(default)]
    pub ado: bool,
    /// Penalty selector ("Afternoon", "Night", "Morning").
    #[serde(default)]
    pub penalty: String,
    /// Special loading selector ("Yes" applies it).
    #[serde(default)]
    pub special: String,
    /// Overtime shift.
    #[serde(default)]
    pub ot: bool,
    /// WOBOD bonus on an overtime shift.
    #[serde(default)]
    pub wobod: bool,
}

impl DayEntry {
    /// Creates a blank entry for the given day.
    pub fn blank(day: Weekday, date: NaiveDate) -> Self {
        Self {
            day,
            date,
            roster: String::new(),
            clock_on: String::new(),
            clock_off: String::new(),
            worked: String::new(),
            sick: false,
            off: false,
            ado: false,
            penalty: String::new(),
            special: String::new(),
            ot: false,
            wobod: false,
        }
    }
}

impl From<DayEntry> for ShiftInput {
    fn from(entry: DayEntry) -> Self {
        let roster = entry.roster.trim().to_ascii_uppercase();
        let worked = parse_duration(&entry.worked);

        ShiftInput {
            day_label: entry.day,
            date: entry.date,
            clock_in: parse_time_of_day(&entry.clock_on),
            clock_out: parse_time_of_day(&entry.clock_off),
            worked_duration: (worked > Decimal::ZERO).then_some(worked),
            sick: entry.sick,
            off: entry.off || roster == "OFF",
            ado: entry.ado || roster == "ADO",
            penalty_type: PenaltyType::from_selector(&entry.penalty),
            special_loading: entry.special.trim().eq_ignore_ascii_case("yes"),
            overtime: OvertimeOptions {
                ot_enabled: entry.ot,
                wobod_enabled: entry.wobod,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn saturday_entry() -> DayEntry {
        DayEntry::blank(Weekday::Sat, make_date("2025-11-15"))
    }

    #[test]
    fn test_blank_entry_converts_to_plain_worked_day() {
        let input: ShiftInput = saturday_entry().into();
        assert_eq!(input.clock_in, None);
        assert_eq!(input.clock_out, None);
        assert_eq!(input.worked_duration, None);
        assert_eq!(input.penalty_type, PenaltyType::None);
        assert!(!input.special_loading);
        assert!(!input.off && !input.ado && !input.sick);
    }

    #[test]
    fn test_times_and_duration_are_parsed() {
        let entry = DayEntry {
            clock_on: "1900".to_string(),
            clock_off: "02:33".to_string(),
            worked: "7:30".to_string(),
            ..saturday_entry()
        };

        let input: ShiftInput = entry.into();
        assert_eq!(input.clock_in, NaiveTime::from_hms_opt(19, 0, 0));
        assert_eq!(input.clock_out, NaiveTime::from_hms_opt(2, 33, 0));
        assert_eq!(input.worked_duration, Some(Decimal::from_str("7.5").unwrap()));
    }

    #[test]
    fn test_unparseable_text_becomes_absent() {
        let entry = DayEntry {
            clock_on: "seven".to_string(),
            worked: "lots".to_string(),
            ..saturday_entry()
        };

        let input: ShiftInput = entry.into();
        assert_eq!(input.clock_in, None);
        assert_eq!(input.worked_duration, None);
    }

    #[test]
    fn test_roster_code_sets_flags() {
        let off: ShiftInput = DayEntry {
            roster: "off".to_string(),
            ..saturday_entry()
        }
        .into();
        assert!(off.off);

        let ado: ShiftInput = DayEntry {
            roster: " ADO ".to_string(),
            ..saturday_entry()
        }
        .into();
        assert!(ado.ado);
    }

    #[test]
    fn test_selectors() {
        let entry = DayEntry {
            penalty: "Night".to_string(),
            special: "Yes".to_string(),
            ot: true,
            wobod: true,
            ..saturday_entry()
        };

        let input: ShiftInput = entry.into();
        assert_eq!(input.penalty_type, PenaltyType::Night);
        assert!(input.special_loading);
        assert!(input.overtime.ot_enabled);
        assert!(input.overtime.wobod_enabled);
    }

    #[test]
    fn test_unknown_special_selector_means_no_loading() {
        let entry = DayEntry {
            special: "No".to_string(),
            ..saturday_entry()
        };

        let input: ShiftInput = entry.into();
        assert!(!input.special_loading);
    }

    #[test]
    fn test_day_entry_deserializes_with_defaults() {
        let json = r#"{"day": "Saturday", "date": "2025-11-15", "clock_on": "19:00"}"#;
        let entry: DayEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.day, Weekday::Sat);
        assert_eq!(entry.clock_on, "19:00");
        assert!(entry.worked.is_empty());
        assert!(!entry.ot);
    }
}
