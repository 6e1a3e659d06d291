//! Rate table derivation.
//!
//! Every rate the engine prices against is a fixed function of the three
//! [`BaseRates`]. The table is built once, rounded to 5 decimal places, and
//! only read afterwards.
//!
//! ## Derivation
//!
//! | Rate                      | Value                 |
//! |---------------------------|-----------------------|
//! | Afternoon / Early Morning | afternoon penalty     |
//! | Night / Special Loading   | night penalty         |
//! | OT 150% / 200% / 250%     | ordinary × 1.5/2/2.5  |
//! | ADO Adjustment            | ordinary              |
//! | Saturday Loading 50%      | ordinary × 0.5        |
//! | Sunday Loading 100%       | ordinary × 1.0        |
//! | Public Holiday            | ordinary              |
//! | PH Loading 50% / 100%     | ordinary × 0.5 / 1.0  |
//! | Sick With Certificate     | ordinary              |
//! | Ordinary Hours            | ordinary              |

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::BaseRates;
use crate::error::{EngineError, EngineResult};

use super::rounding::round_rate;

/// The name of an entry in the [`RateTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateName {
    /// Afternoon shift penalty, per hour.
    AfternoonShift,
    /// Early morning shift penalty, per hour.
    EarlyMorning,
    /// Night shift penalty, per hour.
    NightShift,
    /// Flat special loading.
    SpecialLoading,
    /// Weekday overtime, 150% of ordinary.
    #[serde(rename = "ot_150")]
    Ot150,
    /// Saturday overtime, 200% of ordinary.
    #[serde(rename = "ot_200")]
    Ot200,
    /// Sunday overtime, 250% of ordinary.
    #[serde(rename = "ot_250")]
    Ot250,
    /// ADO adjustment, per hour.
    AdoAdjustment,
    /// Saturday loading, 50% of ordinary.
    SaturdayLoading,
    /// Sunday loading, 100% of ordinary.
    SundayLoading,
    /// Public holiday ordinary rate.
    PublicHoliday,
    /// Public holiday loading, 50% of ordinary.
    #[serde(rename = "public_holiday_loading_50")]
    PublicHolidayLoading50,
    /// Public holiday loading, 100% of ordinary.
    #[serde(rename = "public_holiday_loading_100")]
    PublicHolidayLoading100,
    /// Sick with medical certificate, per hour.
    SickWithCertificate,
    /// Ordinary hours rate.
    OrdinaryHours,
}

impl RateName {
    /// Every rate name, in table order.
    pub const ALL: [RateName; 15] = [
        RateName::AfternoonShift,
        RateName::EarlyMorning,
        RateName::NightShift,
        RateName::SpecialLoading,
        RateName::Ot150,
        RateName::Ot200,
        RateName::Ot250,
        RateName::AdoAdjustment,
        RateName::SaturdayLoading,
        RateName::SundayLoading,
        RateName::PublicHoliday,
        RateName::PublicHolidayLoading50,
        RateName::PublicHolidayLoading100,
        RateName::SickWithCertificate,
        RateName::OrdinaryHours,
    ];

    /// The machine-readable key, matching the serialized form.
    pub fn key(&self) -> &'static str {
        match self {
            RateName::AfternoonShift => "afternoon_shift",
            RateName::EarlyMorning => "early_morning",
            RateName::NightShift => "night_shift",
            RateName::SpecialLoading => "special_loading",
            RateName::Ot150 => "ot_150",
            RateName::Ot200 => "ot_200",
            RateName::Ot250 => "ot_250",
            RateName::AdoAdjustment => "ado_adjustment",
            RateName::SaturdayLoading => "saturday_loading",
            RateName::SundayLoading => "sunday_loading",
            RateName::PublicHoliday => "public_holiday",
            RateName::PublicHolidayLoading50 => "public_holiday_loading_50",
            RateName::PublicHolidayLoading100 => "public_holiday_loading_100",
            RateName::SickWithCertificate => "sick_with_certificate",
            RateName::OrdinaryHours => "ordinary_hours",
        }
    }

    /// The label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            RateName::AfternoonShift => "Afternoon Shift",
            RateName::EarlyMorning => "Early Morning",
            RateName::NightShift => "Night Shift",
            RateName::SpecialLoading => "Special Loading",
            RateName::Ot150 => "OT 150%",
            RateName::Ot200 => "OT 200%",
            RateName::Ot250 => "OT 250%",
            RateName::AdoAdjustment => "ADO Adjustment",
            RateName::SaturdayLoading => "Sat Loading 50%",
            RateName::SundayLoading => "Sun Loading 100%",
            RateName::PublicHoliday => "Public Holiday",
            RateName::PublicHolidayLoading50 => "PH Loading 50%",
            RateName::PublicHolidayLoading100 => "PH Loading 100%",
            RateName::SickWithCertificate => "Sick With MC",
            RateName::OrdinaryHours => "Ordinary Hours",
        }
    }
}

impl std::fmt::Display for RateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A read-only mapping from rate name to an hourly amount.
///
/// Serializes as a plain JSON object keyed by [`RateName::key`].
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{RateName, build_rate_table};
/// use timesheet_engine::config::BaseRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = build_rate_table(&BaseRates::default());
/// assert_eq!(table.get(RateName::Ot150).unwrap(), Decimal::from_str("74.72763").unwrap());
/// assert_eq!(table.get(RateName::SaturdayLoading).unwrap(), Decimal::from_str("24.90921").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    entries: BTreeMap<RateName, Decimal>,
}

impl RateTable {
    /// Builds a table from explicit entries, rounding each to 5 decimal places.
    ///
    /// Entries may be incomplete; lookups of absent names fail with
    /// [`EngineError::MissingRate`].
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (RateName, Decimal)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, value)| (name, round_rate(value)))
                .collect(),
        }
    }

    /// Looks up a rate.
    pub fn get(&self, name: RateName) -> EngineResult<Decimal> {
        self.entries
            .get(&name)
            .copied()
            .ok_or_else(|| EngineError::MissingRate {
                name: name.key().to_string(),
            })
    }

    /// Returns the underlying entries.
    pub fn entries(&self) -> &BTreeMap<RateName, Decimal> {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The night penalty as a percentage of the ordinary rate.
    ///
    /// Returns `None` when either entry is missing or the ordinary rate is zero.
    pub fn night_loading_percent(&self) -> Option<Decimal> {
        let ordinary = self.entries.get(&RateName::OrdinaryHours)?;
        let night = self.entries.get(&RateName::NightShift)?;
        if ordinary.is_zero() {
            return None;
        }
        Some(round_rate(*night / *ordinary * Decimal::ONE_HUNDRED))
    }
}

/// Derives the full rate table from the three base rates.
pub fn build_rate_table(base: &BaseRates) -> RateTable {
    let ordinary = base.ordinary;
    let afternoon = base.afternoon_penalty;
    let night = base.night_penalty;
    let half = Decimal::new(5, 1);

    RateTable::from_entries([
        (RateName::AfternoonShift, afternoon),
        (RateName::EarlyMorning, afternoon),
        (RateName::NightShift, night),
        (RateName::SpecialLoading, night),
        (RateName::Ot150, ordinary * Decimal::new(15, 1)),
        (RateName::Ot200, ordinary * Decimal::TWO),
        (RateName::Ot250, ordinary * Decimal::new(25, 1)),
        (RateName::AdoAdjustment, ordinary),
        (RateName::SaturdayLoading, ordinary * half),
        (RateName::SundayLoading, ordinary),
        (RateName::PublicHoliday, ordinary),
        (RateName::PublicHolidayLoading50, ordinary * half),
        (RateName::PublicHolidayLoading100, ordinary),
        (RateName::SickWithCertificate, ordinary),
        (RateName::OrdinaryHours, ordinary),
    ])
}
