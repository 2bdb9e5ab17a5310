//! Coupon schedule generation.
//!
//! Coupon dates are rolled backward from maturity in whole coupon periods.
//! Every date is computed as `maturity - k periods` rather than by stepping
//! from the previous date, so a day clamped in February does not drift
//! through the rest of the schedule. End-of-month maturities keep every
//! coupon on the last day of its month.
//!
//! # Example
//!
//! ```rust
//! use tenor_bonds::cashflows::BondSchedule;
//! use tenor_core::daycounts::DayCountConvention;
//! use tenor_core::types::{Date, Frequency};
//!
//! let schedule = BondSchedule::new(
//!     Date::from_ymd(2024, 3, 1).unwrap(),
//!     Date::from_ymd(2026, 1, 15).unwrap(),
//!     Frequency::SemiAnnual,
//!     DayCountConvention::Thirty360E,
//! )
//! .unwrap();
//!
//! assert_eq!(schedule.coupon_dates().len(), 4);
//! assert_eq!(schedule.previous_coupon(), Date::from_ymd(2024, 1, 15).unwrap());
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{Date, Frequency};

use crate::error::{BondError, BondResult};

/// A future coupon date and its distance from settlement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowDate {
    /// Payment date.
    pub date: Date,
    /// Year fraction from settlement to `date` under the schedule's convention.
    pub years: f64,
}

/// Coupon dates of a bond as seen from a settlement date.
///
/// Immutable once built: the future coupon dates (strictly after
/// settlement), the previous coupon date on or before settlement (possibly
/// a virtual date before issue), and the accrual fraction of the current
/// period are all fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondSchedule {
    settlement: Date,
    maturity: Date,
    frequency: Frequency,
    convention: DayCountConvention,
    previous_coupon: Date,
    coupon_dates: Vec<CashFlowDate>,
    accrual_fraction: f64,
}

impl BondSchedule {
    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// `BondError::InvalidSchedule` if maturity is not after settlement.
    pub fn new(
        settlement: Date,
        maturity: Date,
        frequency: Frequency,
        convention: DayCountConvention,
    ) -> BondResult<Self> {
        if maturity <= settlement {
            return Err(BondError::invalid_schedule(format!(
                "maturity {maturity} must be after settlement {settlement}"
            )));
        }

        let months = i32::try_from(frequency.months_per_period())
            .map_err(|_| BondError::invalid_schedule("coupon period too long"))?;
        let end_of_month = maturity.is_end_of_month();
        let roll = |periods: i32| -> BondResult<Date> {
            let months_back = periods
                .checked_mul(months)
                .ok_or_else(|| BondError::invalid_schedule("schedule too long"))?;
            let date = maturity.add_months(-months_back)?;
            Ok(if end_of_month { date.end_of_month() } else { date })
        };

        let mut future = Vec::new();
        let mut periods = 0;
        let previous_coupon = loop {
            let date = roll(periods)?;
            if date <= settlement {
                break date;
            }
            future.push(date);
            periods += 1;
        };
        future.reverse();

        let coupon_dates: Vec<CashFlowDate> = future
            .into_iter()
            .map(|date| CashFlowDate {
                date,
                years: convention.year_fraction_f64(settlement, date),
            })
            .collect();

        // `future` is non-empty because maturity > settlement.
        let next_coupon = coupon_dates.first().map_or(maturity, |cf| cf.date);
        let accrual_fraction =
            accrual_fraction(convention, previous_coupon, settlement, next_coupon);

        log::trace!(
            "schedule {settlement}..{maturity} ({frequency}, {convention}): {} coupons, previous {previous_coupon}",
            coupon_dates.len()
        );

        Ok(Self {
            settlement,
            maturity,
            frequency,
            convention,
            previous_coupon,
            coupon_dates,
            accrual_fraction,
        })
    }

    /// Builds the schedule from a payments-per-year count.
    ///
    /// # Errors
    ///
    /// `BondError::InvalidSchedule` if `periods_per_year` is not one of
    /// 1, 2, 3, 4, 6 or 12, or if maturity is not after settlement.
    pub fn with_periods_per_year(
        settlement: Date,
        maturity: Date,
        periods_per_year: i32,
        convention: DayCountConvention,
    ) -> BondResult<Self> {
        let frequency = Frequency::from_periods_per_year(periods_per_year).ok_or_else(|| {
            BondError::invalid_schedule(format!(
                "frequency must be 1, 2, 3, 4, 6 or 12 payments per year, got {periods_per_year}"
            ))
        })?;
        Self::new(settlement, maturity, frequency, convention)
    }

    /// Settlement (valuation) date.
    pub fn settlement(&self) -> Date {
        self.settlement
    }

    /// Maturity date.
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Coupon frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Day count convention.
    pub fn convention(&self) -> DayCountConvention {
        self.convention
    }

    /// Last coupon date on or before settlement.
    pub fn previous_coupon(&self) -> Date {
        self.previous_coupon
    }

    /// First coupon date after settlement.
    pub fn next_coupon(&self) -> Date {
        self.coupon_dates.first().map_or(self.maturity, |cf| cf.date)
    }

    /// Future coupon dates, ascending, maturity last.
    pub fn coupon_dates(&self) -> &[CashFlowDate] {
        &self.coupon_dates
    }

    /// Elapsed share of the current coupon period, in `[0, 1)`.
    ///
    /// Day count from the previous coupon to settlement divided by the day
    /// count of the whole period. Zero on a coupon date.
    pub fn accrual_fraction(&self) -> f64 {
        self.accrual_fraction
    }

    /// Year fraction from settlement to maturity.
    pub fn years_to_maturity(&self) -> f64 {
        self.convention
            .year_fraction_f64(self.settlement, self.maturity)
    }
}

fn accrual_fraction(
    convention: DayCountConvention,
    previous: Date,
    settlement: Date,
    next: Date,
) -> f64 {
    let elapsed = convention.year_fraction(previous, settlement);
    let period = convention.year_fraction(previous, next);
    if period <= Decimal::ZERO {
        return 0.0;
    }
    (elapsed / period).to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn dates(schedule: &BondSchedule) -> Vec<Date> {
        schedule.coupon_dates().iter().map(|cf| cf.date).collect()
    }

    #[test]
    fn test_settlement_on_coupon_date() {
        let schedule = BondSchedule::new(
            date(2024, 1, 1),
            date(2025, 1, 1),
            Frequency::Annual,
            DayCountConvention::Thirty360E,
        )
        .unwrap();

        assert_eq!(dates(&schedule), vec![date(2025, 1, 1)]);
        assert_eq!(schedule.previous_coupon(), date(2024, 1, 1));
        assert_eq!(schedule.accrual_fraction(), 0.0);
        assert_eq!(schedule.coupon_dates()[0].years, 1.0);
        assert_eq!(schedule.years_to_maturity(), 1.0);
    }

    #[test]
    fn test_semi_annual_mid_period() {
        let schedule = BondSchedule::new(
            date(2024, 4, 15),
            date(2026, 1, 15),
            Frequency::SemiAnnual,
            DayCountConvention::Thirty360E,
        )
        .unwrap();

        assert_eq!(
            dates(&schedule),
            vec![date(2024, 7, 15), date(2025, 1, 15), date(2025, 7, 15), date(2026, 1, 15)]
        );
        assert_eq!(schedule.previous_coupon(), date(2024, 1, 15));
        assert_eq!(schedule.next_coupon(), date(2024, 7, 15));
        // 90 of 180 days
        assert_relative_eq!(schedule.accrual_fraction(), 0.5, epsilon = 1e-15);
        assert_relative_eq!(schedule.coupon_dates()[0].years, 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_end_of_month_maturity_stays_at_month_end() {
        let schedule = BondSchedule::new(
            date(2024, 1, 10),
            date(2025, 2, 28),
            Frequency::Quarterly,
            DayCountConvention::Act365Fixed,
        )
        .unwrap();

        assert_eq!(
            dates(&schedule),
            vec![
                date(2024, 2, 29),
                date(2024, 5, 31),
                date(2024, 8, 31),
                date(2024, 11, 30),
                date(2025, 2, 28),
            ]
        );
        assert_eq!(schedule.previous_coupon(), date(2023, 11, 30));
    }

    #[test]
    fn test_clamped_day_does_not_drift() {
        let schedule = BondSchedule::new(
            date(2024, 1, 1),
            date(2024, 12, 30),
            Frequency::Monthly,
            DayCountConvention::Act360,
        )
        .unwrap();

        let all = dates(&schedule);
        assert_eq!(all[1], date(2024, 2, 29));
        // March is not dragged to the 29th
        assert_eq!(all[2], date(2024, 3, 30));
        assert_eq!(all.len(), 12);
    }

    #[test]
    fn test_short_bond_inside_first_period() {
        let schedule = BondSchedule::new(
            date(2024, 11, 1),
            date(2025, 1, 1),
            Frequency::Annual,
            DayCountConvention::Thirty360E,
        )
        .unwrap();

        assert_eq!(dates(&schedule), vec![date(2025, 1, 1)]);
        assert_eq!(schedule.previous_coupon(), date(2024, 1, 1));
        assert_relative_eq!(schedule.accrual_fraction(), 300.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn test_maturity_equal_to_settlement() {
        let d = date(2024, 1, 1);
        let err =
            BondSchedule::new(d, d, Frequency::Annual, DayCountConvention::Thirty360E).unwrap_err();
        assert!(matches!(err, BondError::InvalidSchedule { .. }));
    }

    #[test]
    fn test_maturity_before_settlement() {
        let err = BondSchedule::new(
            date(2025, 1, 1),
            date(2024, 1, 1),
            Frequency::Annual,
            DayCountConvention::Thirty360E,
        )
        .unwrap_err();
        assert!(matches!(err, BondError::InvalidSchedule { .. }));
    }

    #[test]
    fn test_invalid_frequency() {
        for n in [0, -2, 5, 24] {
            let err = BondSchedule::with_periods_per_year(
                date(2024, 1, 1),
                date(2030, 1, 1),
                n,
                DayCountConvention::Thirty360E,
            )
            .unwrap_err();
            assert!(matches!(err, BondError::InvalidSchedule { .. }), "n = {n}");
        }
    }

    #[test]
    fn test_years_to_each_flow_increase() {
        let schedule = BondSchedule::with_periods_per_year(
            date(2024, 5, 20),
            date(2034, 3, 15),
            4,
            DayCountConvention::ActActIsda,
        )
        .unwrap();

        let years: Vec<f64> = schedule.coupon_dates().iter().map(|cf| cf.years).collect();
        assert!(years.windows(2).all(|w| w[0] < w[1]));
        assert!(years[0] > 0.0);
        assert_relative_eq!(*years.last().unwrap(), schedule.years_to_maturity());
    }
}
