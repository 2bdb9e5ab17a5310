//! Bond pricing.
//!
//! This module provides:
//! - [`price`]: discounting off an NSS curve, with an optional static spread
//! - [`dirty_price_at_yield`] / [`clean_price_at_yield`]: flat-yield pricing
//!   used by the yield solver
//! - [`BondPrice`]: dirty, clean and accrued amounts

mod flat_yield;

pub use flat_yield::{
    clean_price_at_yield, dirty_price_at_yield, dirty_price_derivative, weighted_time_at_yield,
};

use serde::{Deserialize, Serialize};

use tenor_curves::TermStructure;

use crate::error::BondResult;
use crate::instruments::StraightBond;

/// Price of a bond at settlement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondPrice {
    /// Present value of all future flows.
    pub dirty: f64,
    /// Dirty price less accrued interest.
    pub clean: f64,
    /// Accrued interest.
    pub accrued: f64,
}

impl BondPrice {
    /// Builds a price from a dirty amount and the bond's accrued interest.
    pub fn from_dirty(dirty: f64, accrued: f64) -> Self {
        Self {
            dirty,
            clean: dirty - accrued,
            accrued,
        }
    }
}

/// Prices a bond off the curve, shifting every zero rate by `spread_bps`.
///
/// Each flow at `t` years is discounted with
/// `(1 + r(t) + spread_bps / 10_000) ^ (-t)`.
///
/// # Errors
///
/// Propagates the curve error when a discount factor cannot be formed,
/// typically because the spread pushes a rate below -100%.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::instruments::StraightBond;
/// use tenor_bonds::pricing::price;
/// use tenor_core::daycounts::DayCountConvention;
/// use tenor_core::types::{Date, Frequency};
/// use tenor_curves::TermStructure;
///
/// let bond = StraightBond::new(
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     Date::from_ymd(2025, 1, 1).unwrap(),
///     Frequency::Annual,
///     DayCountConvention::Thirty360E,
///     5.0,
///     100.0,
/// )
/// .unwrap();
///
/// let curve = TermStructure::flat(0.03).unwrap();
/// let p = price(&bond, &curve, 0.0).unwrap();
/// assert!((p.dirty - 105.0 / 1.03).abs() < 1e-9);
/// assert_eq!(p.accrued, 0.0);
/// ```
pub fn price(bond: &StraightBond, curve: &TermStructure, spread_bps: f64) -> BondResult<BondPrice> {
    let dirty = present_value(bond, curve, spread_bps)?;
    Ok(BondPrice::from_dirty(dirty, bond.accrued_interest()))
}

/// Present value of the bond's future flows off the curve.
pub fn present_value(bond: &StraightBond, curve: &TermStructure, spread_bps: f64) -> BondResult<f64> {
    let mut pv = 0.0;
    for cf in bond.cash_flows() {
        pv += cf.amount() * curve.discount_factor(cf.years, spread_bps)?;
    }
    Ok(pv)
}
