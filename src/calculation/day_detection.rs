//! Day classification and midnight segmentation.
//!
//! This module provides utilities for determining the day type (weekday,
//! Saturday, Sunday) of a date and for splitting shifts at midnight so each
//! portion of a shift is priced by the day it was actually worked on.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the type of day for loading and overtime selection.
///
/// Public holidays are not a day type: a holiday is classified by its day
/// of week like any other date.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday - 50% loading, 200% overtime.
    Saturday,
    /// Sunday - 100% loading, 250% overtime.
    Sunday,
}

impl DayType {
    /// The overtime multiplier of ordinary time for this day type.
    pub fn overtime_multiplier(&self) -> Decimal {
        match self {
            DayType::Weekday => Decimal::new(15, 1),
            DayType::Saturday => Decimal::TWO,
            DayType::Sunday => Decimal::new(25, 1),
        }
    }
}

impl From<Weekday> for DayType {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat => DayType::Saturday,
            Weekday::Sun => DayType::Sunday,
            _ => DayType::Weekday,
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Classifies a calendar date by its day of week.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{DayType, classify_date};
/// use chrono::NaiveDate;
///
/// assert_eq!(classify_date(NaiveDate::from_ymd_opt(2025, 11, 15).unwrap()), DayType::Saturday);
/// assert_eq!(classify_date(NaiveDate::from_ymd_opt(2025, 11, 16).unwrap()), DayType::Sunday);
/// assert_eq!(classify_date(NaiveDate::from_ymd_opt(2025, 11, 17).unwrap()), DayType::Weekday);
/// ```
pub fn classify_date(date: NaiveDate) -> DayType {
    DayType::from(date.weekday())
}

/// Determines the day type for a given datetime.
pub fn get_day_type(datetime: NaiveDateTime) -> DayType {
    classify_date(datetime.date())
}

/// Represents a segment of a shift within a single day.
///
/// A segment starts and ends on the same calendar day, except that its end
/// may be the following midnight.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{ShiftSegment, DayType};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let segment = ShiftSegment {
///     start_time: NaiveDateTime::parse_from_str("2025-11-15 19:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2025-11-16 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     day_type: DayType::Saturday,
///     hours: Decimal::new(50, 1), // 5.0 hours
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSegment {
    /// The start time of this segment.
    pub start_time: NaiveDateTime,
    /// The end time of this segment.
    pub end_time: NaiveDateTime,
    /// The day type of the day the segment falls on.
    pub day_type: DayType,
    /// The number of hours in this segment.
    pub hours: Decimal,
}

impl ShiftSegment {
    fn new(start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            end_time,
            day_type: get_day_type(start_time),
            hours: hours_between(start_time, end_time),
        }
    }

    /// The exact length of the segment.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

/// Splits a shift at every midnight it crosses.
///
/// The returned segments are ordered, contiguous and together cover exactly
/// `start..end`. An empty vector is returned when `end` is not after `start`.
/// Callers normalize a clock-off earlier than the clock-on onto the next day
/// before calling.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{segment_by_midnight, DayType};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2025-11-15 19:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2025-11-16 02:33:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let segments = segment_by_midnight(start, end);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].day_type, DayType::Saturday);
/// assert_eq!(segments[0].hours, Decimal::new(50, 1)); // 5.0 hours
/// assert_eq!(segments[1].day_type, DayType::Sunday);
/// assert_eq!(segments[1].hours, Decimal::new(255, 2)); // 2.55 hours
/// ```
pub fn segment_by_midnight(start: NaiveDateTime, end: NaiveDateTime) -> Vec<ShiftSegment> {
    let mut segments = Vec::new();
    if end <= start {
        return segments;
    }

    let mut cursor = start;
    while cursor.date() < end.date() {
        let next_midnight = NaiveDateTime::from(cursor.date() + Duration::days(1));
        segments.push(ShiftSegment::new(cursor, next_midnight));
        cursor = next_midnight;
    }

    // A shift ending exactly at midnight leaves nothing after the last split
    if cursor < end {
        segments.push(ShiftSegment::new(cursor, end));
    }

    segments
}

/// Calculates the number of hours between two datetimes.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::hours_between;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2025-11-16 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2025-11-16 02:33:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(hours_between(start, end), Decimal::new(255, 2));
/// ```
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let duration_seconds = (end - start).num_seconds();
    Decimal::from(duration_seconds) / Decimal::from(3600)
}
