//! Pricing at a single flat yield, compounded at the coupon frequency.
//!
//! A flow `t` years out is discounted by `(1 + y/f) ^ (-f·t)`, where `f` is
//! the bond's payments per year and `y` a decimal annual yield.

use crate::error::{BondError, BondResult};
use crate::instruments::StraightBond;

/// Per-period growth factor `1 + y/f`, rejected when not positive.
fn period_factor(y: f64, frequency: f64) -> BondResult<f64> {
    let factor = 1.0 + y / frequency;
    if !factor.is_finite() || factor <= 0.0 {
        return Err(BondError::InvalidYield {
            value: y,
            reason: format!("1 + y/{frequency} must be positive"),
        });
    }
    Ok(factor)
}

/// Dirty price of the bond discounted at a flat yield `y`.
///
/// # Errors
///
/// `BondError::InvalidYield` when `1 + y/f <= 0`.
pub fn dirty_price_at_yield(bond: &StraightBond, y: f64) -> BondResult<f64> {
    let f = f64::from(bond.periods_per_year());
    let factor = period_factor(y, f)?;

    Ok(bond
        .cash_flows()
        .iter()
        .map(|cf| cf.amount() * factor.powf(-f * cf.years))
        .sum())
}

/// Clean price at a flat yield: dirty price less accrued interest.
pub fn clean_price_at_yield(bond: &StraightBond, y: f64) -> BondResult<f64> {
    Ok(dirty_price_at_yield(bond, y)? - bond.accrued_interest())
}

/// Derivative of the dirty price with respect to the flat yield.
///
/// `dP/dy = -Σ t·CF·(1 + y/f)^(-f·t - 1)`.
pub fn dirty_price_derivative(bond: &StraightBond, y: f64) -> BondResult<f64> {
    let f = f64::from(bond.periods_per_year());
    let factor = period_factor(y, f)?;

    Ok(-bond
        .cash_flows()
        .iter()
        .map(|cf| cf.years * cf.amount() * factor.powf(-f * cf.years - 1.0))
        .sum::<f64>())
}

/// Present-value-weighted time to the flows, `Σ t·CF·DF(y)`.
///
/// Dividing by the dirty price at the same yield gives the Macaulay
/// duration.
pub fn weighted_time_at_yield(bond: &StraightBond, y: f64) -> BondResult<f64> {
    let f = f64::from(bond.periods_per_year());
    let factor = period_factor(y, f)?;

    Ok(bond
        .cash_flows()
        .iter()
        .map(|cf| cf.years * cf.amount() * factor.powf(-f * cf.years))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenor_core::daycounts::DayCountConvention;
    use tenor_core::types::{Date, Frequency};

    fn bond(frequency: Frequency, coupon: f64) -> StraightBond {
        StraightBond::new(
            Date::from_ymd(2024, 1, 15).unwrap(),
            Date::from_ymd(2029, 1, 15).unwrap(),
            frequency,
            DayCountConvention::Thirty360E,
            coupon,
            100.0,
        )
        .unwrap()
    }

    #[test]
    fn test_par_at_coupon_yield() {
        for frequency in [Frequency::Annual, Frequency::SemiAnnual, Frequency::Quarterly] {
            let b = bond(frequency, 6.0);
            assert_relative_eq!(dirty_price_at_yield(&b, 0.06).unwrap(), 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_yield_sums_flows() {
        let b = bond(Frequency::Annual, 4.0);
        assert_relative_eq!(dirty_price_at_yield(&b, 0.0).unwrap(), 120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let b = bond(Frequency::SemiAnnual, 5.0);
        let y = 0.043;
        let h = 1e-6;
        let fd = (dirty_price_at_yield(&b, y + h).unwrap() - dirty_price_at_yield(&b, y - h).unwrap())
            / (2.0 * h);
        assert_relative_eq!(dirty_price_derivative(&b, y).unwrap(), fd, max_relative = 1e-6);
    }

    #[test]
    fn test_clean_is_dirty_less_accrued() {
        let b = StraightBond::new(
            Date::from_ymd(2024, 4, 15).unwrap(),
            Date::from_ymd(2029, 1, 15).unwrap(),
            Frequency::SemiAnnual,
            DayCountConvention::Thirty360E,
            5.0,
            100.0,
        )
        .unwrap();

        let dirty = dirty_price_at_yield(&b, 0.05).unwrap();
        let clean = clean_price_at_yield(&b, 0.05).unwrap();
        assert_relative_eq!(dirty - clean, 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_yield_below_domain() {
        let b = bond(Frequency::SemiAnnual, 5.0);
        let err = dirty_price_at_yield(&b, -2.0).unwrap_err();
        assert!(matches!(err, BondError::InvalidYield { .. }));
        // y = -f is still outside
        assert!(dirty_price_derivative(&b, -2.0).is_err());
        assert!(dirty_price_at_yield(&b, -1.9).is_ok());
    }
}
