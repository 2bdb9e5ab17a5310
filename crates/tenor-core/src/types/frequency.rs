//! Coupon frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coupon payments per year.
///
/// Only frequencies that divide twelve months evenly are representable, so
/// every coupon period is a whole number of months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// One payment per year
    #[default]
    Annual,
    /// Two payments per year
    SemiAnnual,
    /// Three payments per year (every four months)
    TriAnnual,
    /// Four payments per year
    Quarterly,
    /// Six payments per year (every two months)
    BiMonthly,
    /// Twelve payments per year
    Monthly,
}

impl Frequency {
    /// Maps a payments-per-year count onto a frequency.
    ///
    /// Returns `None` for zero, negative counts, and counts that do not
    /// divide twelve.
    #[must_use]
    pub fn from_periods_per_year(periods: i32) -> Option<Self> {
        match periods {
            1 => Some(Frequency::Annual),
            2 => Some(Frequency::SemiAnnual),
            3 => Some(Frequency::TriAnnual),
            4 => Some(Frequency::Quarterly),
            6 => Some(Frequency::BiMonthly),
            12 => Some(Frequency::Monthly),
            _ => None,
        }
    }

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::TriAnnual => 3,
            Frequency::Quarterly => 4,
            Frequency::BiMonthly => 6,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::TriAnnual => "Tri-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::BiMonthly => "Bi-Monthly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_periods_per_year() {
        for n in [1, 2, 3, 4, 6, 12] {
            let freq = Frequency::from_periods_per_year(n).unwrap();
            assert_eq!(freq.periods_per_year() as i32, n);
            assert_eq!(freq.months_per_period() * freq.periods_per_year(), 12);
        }
        for n in [-1, 0, 5, 7, 24] {
            assert!(Frequency::from_periods_per_year(n).is_none());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Frequency::SemiAnnual.to_string(), "Semi-Annual");
    }
}
