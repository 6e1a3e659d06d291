//! Free-text clock time and duration parsing.
//!
//! Both parsers accept either a colon form (`"18:45"`, `"7:30"`) or a compact
//! three or four digit form (`"1845"`, `"730"`). Neither ever fails: a clock
//! time that cannot be read is `None`, a duration that cannot be read is zero.

use chrono::NaiveTime;
use rust_decimal::Decimal;

/// Splits a compact `"HMM"`/`"HHMM"` string into hours and minutes.
fn split_compact(text: &str) -> Option<(u32, u32)> {
    if !(3..=4).contains(&text.len()) || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = text.split_at(text.len() - 2);
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

/// Parses a clock time of day.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day("730"), NaiveTime::from_hms_opt(7, 30, 0));
/// assert_eq!(parse_time_of_day("18:45"), NaiveTime::from_hms_opt(18, 45, 0));
/// assert_eq!(parse_time_of_day(""), None);
/// assert_eq!(parse_time_of_day("25:00"), None);
/// ```
pub fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.contains(':') {
        return NaiveTime::parse_from_str(text, "%H:%M").ok();
    }

    let (hours, minutes) = split_compact(text)?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Parses a worked duration into decimal hours.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::parse_duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_duration("7:30"), Decimal::new(75, 1));
/// assert_eq!(parse_duration("845"), Decimal::new(875, 2));
/// assert_eq!(parse_duration("eight"), Decimal::ZERO);
/// ```
pub fn parse_duration(text: &str) -> Decimal {
    let text = text.trim();
    if text.is_empty() {
        return Decimal::ZERO;
    }

    let parts = if let Some((hours, minutes)) = text.split_once(':') {
        match (hours.trim().parse::<u32>(), minutes.trim().parse::<u32>()) {
            (Ok(h), Ok(m)) => Some((h, m)),
            _ => None,
        }
    } else {
        split_compact(text)
    };

    match parts {
        Some((hours, minutes)) => Decimal::from(hours) + Decimal::from(minutes) / Decimal::from(60),
        None => Decimal::ZERO,
    }
}
