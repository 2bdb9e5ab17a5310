//! Modified and Macaulay duration.
//!
//! Duration is measured against the bond's own flat yield, compounded at
//! the coupon frequency, the same convention the yield solver uses. For a
//! curve price the yield `y*` that reproduces the curve's dirty price is
//! solved first.
//!
//! ```text
//! D_mod = -(1/P)·dP/dy = Σ t·CF·(1 + y/f)^(-f·t) / (P · (1 + y/f))
//! D_mac = D_mod · (1 + y/f)
//! ```

use tenor_bonds::instruments::StraightBond;
use tenor_bonds::pricing::{dirty_price_at_yield, price, weighted_time_at_yield};
use tenor_curves::TermStructure;

use crate::error::AnalyticsResult;
use crate::quote::Quote;
use crate::yields::YieldSolver;

/// Macaulay duration at a flat yield `y` (decimal), in years.
pub fn macaulay_duration_at_yield(bond: &StraightBond, y: f64) -> AnalyticsResult<f64> {
    let pv = dirty_price_at_yield(bond, y)?;
    Ok(weighted_time_at_yield(bond, y)? / pv)
}

/// Modified duration at a flat yield `y` (decimal).
pub fn modified_duration_at_yield(bond: &StraightBond, y: f64) -> AnalyticsResult<f64> {
    let f = f64::from(bond.periods_per_year());
    Ok(macaulay_duration_at_yield(bond, y)? / (1.0 + y / f))
}

/// Modified duration of the bond priced off `curve` at `spread_bps`.
///
/// # Errors
///
/// Fails if the curve cannot price the bond or no flat yield reproduces
/// the curve price.
pub fn modified_duration(
    bond: &StraightBond,
    curve: &TermStructure,
    spread_bps: f64,
) -> AnalyticsResult<f64> {
    let y = curve_yield(bond, curve, spread_bps, &YieldSolver::new())?;
    modified_duration_at_yield(bond, y)
}

/// Macaulay duration of the bond priced off `curve` at `spread_bps`.
pub fn macaulay_duration(
    bond: &StraightBond,
    curve: &TermStructure,
    spread_bps: f64,
) -> AnalyticsResult<f64> {
    let y = curve_yield(bond, curve, spread_bps, &YieldSolver::new())?;
    macaulay_duration_at_yield(bond, y)
}

/// Flat yield equivalent to the curve's dirty price.
pub(crate) fn curve_yield(
    bond: &StraightBond,
    curve: &TermStructure,
    spread_bps: f64,
    solver: &YieldSolver,
) -> AnalyticsResult<f64> {
    let dirty = price(bond, curve, spread_bps)?.dirty;
    Ok(solver.solve(bond, Quote::Dirty(dirty))?.yield_value)
}
