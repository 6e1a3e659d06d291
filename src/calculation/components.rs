//! Hour buckets derived from shift segments.
//!
//! Segment durations are summed by day type, and weekday segments also
//! accrue the portion worked inside the night window (18:00:00 to 23:59:59
//! of the segment's own day).

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::day_detection::{DayType, ShiftSegment, hours_between};
use super::rounding::round_hours;

/// Start of the night window.
pub const NIGHT_WINDOW_START: NaiveTime = match NaiveTime::from_hms_opt(18, 0, 0) {
    Some(time) => time,
    None => panic!("invalid night window start"),
};

/// End of the night window.
pub const NIGHT_WINDOW_END: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => panic!("invalid night window end"),
};

/// Hours worked for a day, grouped by how they are loaded.
///
/// `night_hours` overlaps `weekday_hours`; it is not an extra bucket of time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentBuckets {
    /// Hours on Monday to Friday.
    pub weekday_hours: Decimal,
    /// Hours on Saturday.
    pub saturday_hours: Decimal,
    /// Hours on Sunday.
    pub sunday_hours: Decimal,
    /// Weekday hours inside the night window.
    pub night_hours: Decimal,
}

impl ComponentBuckets {
    /// Buckets for a day without usable clock times, all hours on one day type.
    pub fn whole_day(day_type: DayType, hours: Decimal) -> Self {
        let mut buckets = Self::default();
        *buckets.bucket_mut(day_type) += hours;
        buckets
    }

    /// A copy with every bucket rounded to 2 decimal places.
    ///
    /// Weekend loading prices segment-derived hours at this precision.
    pub fn rounded_hours(&self) -> Self {
        Self {
            weekday_hours: round_hours(self.weekday_hours),
            saturday_hours: round_hours(self.saturday_hours),
            sunday_hours: round_hours(self.sunday_hours),
            night_hours: round_hours(self.night_hours),
        }
    }

    /// Hours for the given day type.
    pub fn hours_for(&self, day_type: DayType) -> Decimal {
        match day_type {
            DayType::Weekday => self.weekday_hours,
            DayType::Saturday => self.saturday_hours,
            DayType::Sunday => self.sunday_hours,
        }
    }

    /// Total hours across the day-type buckets.
    pub fn total_hours(&self) -> Decimal {
        self.weekday_hours + self.saturday_hours + self.sunday_hours
    }

    fn bucket_mut(&mut self, day_type: DayType) -> &mut Decimal {
        match day_type {
            DayType::Weekday => &mut self.weekday_hours,
            DayType::Saturday => &mut self.saturday_hours,
            DayType::Sunday => &mut self.sunday_hours,
        }
    }
}

/// Hours of the segment that fall inside the night window of its own day.
fn night_window_overlap(segment: &ShiftSegment) -> Decimal {
    let day = segment.start_time.date();
    let window_start = NaiveDateTime::new(day, NIGHT_WINDOW_START);
    let window_end = NaiveDateTime::new(day, NIGHT_WINDOW_END);

    let overlap_start = segment.start_time.max(window_start);
    let overlap_end = segment.end_time.min(window_end);

    if overlap_end > overlap_start {
        hours_between(overlap_start, overlap_end)
    } else {
        Decimal::ZERO
    }
}

/// Sums segment hours into day-type buckets and weekday night hours.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{aggregate_components, segment_by_midnight};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// // Friday 14:00 to 20:00
/// let start = NaiveDateTime::parse_from_str("2025-11-14 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2025-11-14 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let buckets = aggregate_components(&segment_by_midnight(start, end));
/// assert_eq!(buckets.weekday_hours, Decimal::from(6));
/// assert_eq!(buckets.night_hours, Decimal::from(2));
/// ```
pub fn aggregate_components(segments: &[ShiftSegment]) -> ComponentBuckets {
    segments
        .iter()
        .fold(ComponentBuckets::default(), |mut buckets, segment| {
            *buckets.bucket_mut(segment.day_type) += segment.hours;
            if segment.day_type == DayType::Weekday {
                buckets.night_hours += night_window_overlap(segment);
            }
            buckets
        })
}
