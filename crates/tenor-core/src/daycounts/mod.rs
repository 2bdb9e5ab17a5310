//! Day count conventions.
//!
//! A day count convention turns a calendar interval into a fraction of a
//! year. Fractions are computed in `Decimal` so that, for example, a full
//! 30/360 year is exactly one. Callers that discount in floating point use
//! [`DayCount::year_fraction_f64`].
//!
//! # Supported Conventions
//!
//! - [`Thirty360US`]: 30/360 US (bond basis, February end-of-month rules)
//! - [`Thirty360E`]: 30E/360 (Eurobond basis)
//! - [`Thirty360EIsda`]: 30E/360 ISDA (every month end counts as day 30)
//! - [`Act360`]: Actual/360
//! - [`Act365Fixed`]: Actual/365 Fixed
//! - [`Act365Leap`]: Actual/365 Leap
//! - [`ActActIsda`]: Actual/Actual ISDA
//!
//! Every convention gives zero for identical dates and a negative fraction
//! when `end` precedes `start`.

mod actual;
mod thirty360;

pub use actual::{Act360, Act365Fixed, Act365Leap, ActActIsda};
pub use thirty360::{Thirty360E, Thirty360EIsda, Thirty360US};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Trait for day count conventions.
pub trait DayCount: Send + Sync {
    /// Returns the display name of the convention (e.g. "30E/360").
    fn name(&self) -> &'static str;

    /// Year fraction between two dates.
    ///
    /// Negative when `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Day count between two dates under the convention's month rules.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Year fraction as `f64`, for discounting.
    fn year_fraction_f64(&self, start: Date, end: Date) -> f64 {
        self.year_fraction(start, end).to_f64().unwrap_or(f64::NAN)
    }
}

/// Runtime-selectable day count convention.
///
/// # Example
///
/// ```rust
/// use tenor_core::daycounts::DayCountConvention;
/// use tenor_core::types::Date;
///
/// let convention: DayCountConvention = "ACT/360".parse().unwrap();
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 7, 1).unwrap();
/// assert!(convention.year_fraction_f64(start, end) > 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// 30/360 US (bond basis)
    Thirty360US,
    /// 30E/360 (Eurobond basis)
    #[default]
    Thirty360E,
    /// 30E/360 ISDA
    Thirty360EIsda,
    /// Actual/360
    Act360,
    /// Actual/365 Fixed
    Act365Fixed,
    /// Actual/365 Leap
    Act365Leap,
    /// Actual/Actual ISDA
    ActActIsda,
}

impl DayCountConvention {
    /// Returns the implementation behind this convention.
    #[must_use]
    pub fn day_counter(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Thirty360US => &Thirty360US,
            DayCountConvention::Thirty360E => &Thirty360E,
            DayCountConvention::Thirty360EIsda => &Thirty360EIsda,
            DayCountConvention::Act360 => &Act360,
            DayCountConvention::Act365Fixed => &Act365Fixed,
            DayCountConvention::Act365Leap => &Act365Leap,
            DayCountConvention::ActActIsda => &ActActIsda,
        }
    }

    /// Returns the display name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.day_counter().name()
    }

    /// Returns all supported conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Thirty360US,
            DayCountConvention::Thirty360E,
            DayCountConvention::Thirty360EIsda,
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::Act365Leap,
            DayCountConvention::ActActIsda,
        ]
    }

    /// Year fraction between two dates.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        self.day_counter().year_fraction(start, end)
    }

    /// Year fraction between two dates as `f64`.
    #[must_use]
    pub fn year_fraction_f64(&self, start: Date, end: Date) -> f64 {
        self.day_counter().year_fraction_f64(start, end)
    }

    /// Day count between two dates.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        self.day_counter().day_count(start, end)
    }
}

/// Year fraction for a convention given by name.
///
/// The name is resolved before either date is looked at, so an unknown
/// convention fails with `CoreError::UnsupportedConvention` regardless of
/// the dates supplied.
pub fn year_fraction(start: Date, end: Date, convention: &str) -> CoreResult<f64> {
    let convention: DayCountConvention = convention.parse()?;
    Ok(convention.year_fraction_f64(start, end))
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Parses display names ("30E/360", "ACT/ACT ISDA"), compact forms
    /// ("30E360", "ACTACT"), and common aliases ("BOND", "EUROBOND").
    /// Matching ignores case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "30/360" | "30/360 US" | "30/360US" | "30U/360" | "30360" | "BOND"
            | "THIRTY360US" => Ok(DayCountConvention::Thirty360US),

            "30E/360" | "30E360" | "30/360 ICMA" | "EUROBOND" | "THIRTY360E" => {
                Ok(DayCountConvention::Thirty360E)
            }

            "30E/360 ISDA" | "30E/360ISDA" | "30E360ISDA" | "THIRTY360EISDA" => {
                Ok(DayCountConvention::Thirty360EIsda)
            }

            "ACT/360" | "ACTUAL/360" | "ACT360" | "A360" => Ok(DayCountConvention::Act360),

            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACT365" | "ACT365F"
            | "A365F" => Ok(DayCountConvention::Act365Fixed),

            "ACT/365L" | "ACT/365 LEAP" | "ACT365L" => Ok(DayCountConvention::Act365Leap),

            "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACTACT" | "ACTACTISDA" => {
                Ok(DayCountConvention::ActActIsda)
            }

            _ => Err(CoreError::unsupported_convention(s)),
        }
    }
}

/// Orders a pair of dates, reporting whether they were swapped.
///
/// Conventions with asymmetric month-end rules count the forward interval
/// and negate the result for reversed inputs.
pub(crate) fn ordered(start: Date, end: Date) -> (Date, Date, bool) {
    if end < start {
        (end, start, true)
    } else {
        (start, end, false)
    }
}
