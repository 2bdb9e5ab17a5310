//! Fixed-coupon straight bond.

use serde::{Deserialize, Serialize};

use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{Date, Frequency};

use crate::cashflows::{BondSchedule, CashFlow};
use crate::error::{BondError, BondResult};

/// A bullet bond paying a fixed coupon and redemption at maturity.
///
/// The coupon is quoted in percent of the redemption value, so a 5% bond
/// redeeming at 100 pays `5 / frequency` per period. All derived values are
/// recomputed from the schedule on demand; the curve is supplied per call.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::instruments::StraightBond;
/// use tenor_core::daycounts::DayCountConvention;
/// use tenor_core::types::{Date, Frequency};
///
/// let bond = StraightBond::new(
///     Date::from_ymd(2024, 4, 15).unwrap(),
///     Date::from_ymd(2026, 1, 15).unwrap(),
///     Frequency::SemiAnnual,
///     DayCountConvention::Thirty360E,
///     4.0,
///     100.0,
/// )
/// .unwrap();
///
/// assert_eq!(bond.coupon_amount(), 2.0);
/// assert!((bond.accrued_interest() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StraightBond {
    schedule: BondSchedule,
    coupon: f64,
    redemption: f64,
}

impl StraightBond {
    /// Creates a bond from its terms.
    ///
    /// # Errors
    ///
    /// `BondError::InvalidSchedule` for a maturity not after settlement,
    /// `BondError::InvalidSpec` for a negative or non-finite coupon or a
    /// non-positive redemption.
    pub fn new(
        settlement: Date,
        maturity: Date,
        frequency: Frequency,
        convention: DayCountConvention,
        coupon: f64,
        redemption: f64,
    ) -> BondResult<Self> {
        let schedule = BondSchedule::new(settlement, maturity, frequency, convention)?;
        Self::from_schedule(schedule, coupon, redemption)
    }

    /// Creates a bond on an existing schedule.
    pub fn from_schedule(schedule: BondSchedule, coupon: f64, redemption: f64) -> BondResult<Self> {
        if !coupon.is_finite() || coupon < 0.0 {
            return Err(BondError::invalid_spec(format!(
                "coupon must be a non-negative percentage, got {coupon}"
            )));
        }
        if !redemption.is_finite() || redemption <= 0.0 {
            return Err(BondError::invalid_spec(format!(
                "redemption must be positive, got {redemption}"
            )));
        }
        Ok(Self {
            schedule,
            coupon,
            redemption,
        })
    }

    /// The bond's schedule.
    pub fn schedule(&self) -> &BondSchedule {
        &self.schedule
    }

    /// Annual coupon in percent of redemption.
    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    /// Redemption value paid at maturity.
    pub fn redemption(&self) -> f64 {
        self.redemption
    }

    /// Coupon periods per year.
    pub fn periods_per_year(&self) -> u32 {
        self.schedule.frequency().periods_per_year()
    }

    /// True for a bond paying no coupon.
    pub fn is_zero_coupon(&self) -> bool {
        self.coupon == 0.0
    }

    /// Amount paid on each coupon date: `coupon · redemption / frequency / 100`.
    pub fn coupon_amount(&self) -> f64 {
        self.coupon * self.redemption / f64::from(self.periods_per_year()) / 100.0
    }

    /// Interest accrued since the previous coupon date.
    ///
    /// Zero exactly on a coupon date and for zero-coupon bonds.
    pub fn accrued_interest(&self) -> f64 {
        if self.is_zero_coupon() {
            return 0.0;
        }
        self.coupon_amount() * self.schedule.accrual_fraction()
    }

    /// Year fraction from settlement to maturity.
    pub fn years_to_maturity(&self) -> f64 {
        self.schedule.years_to_maturity()
    }

    /// Future cash flows, ascending; the last one carries the redemption.
    pub fn cash_flows(&self) -> Vec<CashFlow> {
        let coupon = self.coupon_amount();
        let dates = self.schedule.coupon_dates();
        let last = dates.len().saturating_sub(1);

        dates
            .iter()
            .enumerate()
            .map(|(i, cf)| CashFlow {
                date: cf.date,
                years: cf.years,
                coupon,
                principal: if i == last { self.redemption } else { 0.0 },
            })
            .collect()
    }
}
