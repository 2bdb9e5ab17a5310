//! Static (zero-volatility) spread over an NSS curve.
//!
//! The static spread is the constant shift `s`, in basis points, added to
//! every zero rate of the curve so that the discounted flows reproduce the
//! market dirty price:
//!
//! ```text
//! Σ CF_i · (1 + r(t_i) + s/10_000)^(-t_i) = dirty
//! ```

use serde::{Deserialize, Serialize};

use tenor_bonds::instruments::StraightBond;
use tenor_bonds::pricing::present_value;
use tenor_curves::{TermStructure, BPS_PER_UNIT};
use tenor_math::solvers::{expand_bracket, BracketingMethod, SolverConfig, DEFAULT_MAX_EXPANSIONS};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::quote::Quote;

const SOLVER: &str = "spread";

/// Initial spread bracket, in basis points.
pub const DEFAULT_SPREAD_BRACKET: (f64, f64) = (-1_000.0, 10_000.0);

/// Result of a spread calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadResult {
    /// Spread over the curve in basis points.
    pub spread_bps: f64,
    /// Solver iterations used.
    pub iterations: u32,
    /// Final residual in price units.
    pub residual: f64,
}

/// Static spread solver.
///
/// Brent's method by default; bisection can be selected for a slower but
/// strictly bracket-halving search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadSolver {
    config: SolverConfig,
    method: BracketingMethod,
    bracket: (f64, f64),
    max_expansions: u32,
}

impl Default for SpreadSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SpreadSolver {
    /// Creates a solver with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            method: BracketingMethod::default(),
            bracket: DEFAULT_SPREAD_BRACKET,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }

    /// Sets the price tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Selects the bracketing method.
    #[must_use]
    pub fn with_method(mut self, method: BracketingMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the initial bracket, in basis points.
    #[must_use]
    pub fn with_bracket(mut self, lower_bps: f64, upper_bps: f64) -> Self {
        self.bracket = (lower_bps, upper_bps);
        self
    }

    /// Sets how many times the bracket may be widened.
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Bracketing method in use.
    pub fn method(&self) -> BracketingMethod {
        self.method
    }

    /// Solves for the spread that prices the bond at `quote` off `curve`.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::NoRoot` if the quote is not a positive finite
    ///   price, no bracket is found, or the curve cannot discount somewhere
    ///   in the search range
    /// - `AnalyticsError::Convergence` if the iteration cap is hit
    /// - `AnalyticsError::Bond` if the bond cannot be priced at the lower
    ///   end of the bracket
    pub fn solve(
        &self,
        bond: &StraightBond,
        curve: &TermStructure,
        quote: Quote,
    ) -> AnalyticsResult<SpreadResult> {
        let target = quote.dirty(bond);
        if !target.is_finite() || target <= 0.0 {
            return Err(AnalyticsError::no_root(
                SOLVER,
                target,
                "price must be a positive number",
            ));
        }

        // Surface curve failures at the starting point as they are.
        present_value(bond, curve, self.bracket.0)?;
        let floor = spread_floor(bond, curve)?;

        let objective =
            |s: f64| present_value(bond, curve, s).map_or(f64::NAN, |pv| pv - target);

        let (lo, hi) = expand_bracket(
            &objective,
            self.bracket.0,
            self.bracket.1,
            floor,
            self.max_expansions,
        )
        .map_err(|e| AnalyticsError::from_solver(SOLVER, target, e))?;

        let result = self
            .method
            .solve(&objective, lo, hi, &self.config)
            .map_err(|e| AnalyticsError::from_solver(SOLVER, target, e))?;

        log::debug!(
            "spread for dirty {target:.6}: {:.6} bps by {} in {} iterations",
            result.root,
            self.method.name(),
            result.iterations
        );

        Ok(SpreadResult {
            spread_bps: result.root,
            iterations: result.iterations,
            residual: result.residual,
        })
    }
}

/// Spread, in basis points, at which some flow's `1 + r(t) + s` reaches zero.
///
/// Every spread above it discounts the whole bond.
fn spread_floor(bond: &StraightBond, curve: &TermStructure) -> AnalyticsResult<Option<f64>> {
    let floor = bond
        .cash_flows()
        .iter()
        .filter(|cf| cf.years > 0.0)
        .try_fold(f64::NEG_INFINITY, |floor, cf| {
            curve
                .zero_rate(cf.years, 0.0)
                .map(|rate| floor.max(-(1.0 + rate) * BPS_PER_UNIT))
        })?;
    Ok(floor.is_finite().then_some(floor))
}

/// Static spread in basis points, solved with default settings.
pub fn static_spread(
    bond: &StraightBond,
    curve: &TermStructure,
    quote: Quote,
) -> AnalyticsResult<f64> {
    SpreadSolver::new().solve(bond, curve, quote).map(|r| r.spread_bps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenor_bonds::pricing::price;
    use tenor_core::daycounts::DayCountConvention;
    use tenor_core::types::{Date, Frequency};

    fn bond() -> StraightBond {
        StraightBond::new(
            Date::from_ymd(2025, 3, 3).unwrap(),
            Date::from_ymd(2032, 11, 15).unwrap(),
            Frequency::SemiAnnual,
            DayCountConvention::ActActIsda,
            3.75,
            100.0,
        )
        .unwrap()
    }

    fn curve() -> TermStructure {
        TermStructure::new(0.042, -0.012, 0.01, -0.004, 1.8, 9.0).unwrap()
    }

    #[test]
    fn test_zero_spread_at_curve_price() {
        let b = bond();
        let c = curve();
        let p = price(&b, &c, 0.0).unwrap();
        let s = static_spread(&b, &c, Quote::Clean(p.clean)).unwrap();
        assert!(s.abs() < 1e-6, "{s}");
    }

    #[test]
    fn test_bisection_matches_brent() {
        let b = bond();
        let c = curve();
        let p = price(&b, &c, 237.0).unwrap();

        let brent = SpreadSolver::new().solve(&b, &c, Quote::Dirty(p.dirty)).unwrap();
        let bisect = SpreadSolver::new()
            .with_method(BracketingMethod::Bisection)
            .solve(&b, &c, Quote::Dirty(p.dirty))
            .unwrap();

        assert_relative_eq!(brent.spread_bps, 237.0, epsilon = 1e-6);
        assert_relative_eq!(bisect.spread_bps, 237.0, epsilon = 1e-6);
        assert!(brent.iterations < bisect.iterations);
    }

    #[test]
    fn test_deep_negative_spread() {
        let b = StraightBond::new(
            Date::from_ymd(2024, 1, 1).unwrap(),
            Date::from_ymd(2025, 1, 1).unwrap(),
            Frequency::Annual,
            DayCountConvention::Thirty360E,
            5.0,
            100.0,
        )
        .unwrap();
        let c = TermStructure::flat(0.03).unwrap();
        let p = price(&b, &c, -5000.0).unwrap();
        assert_relative_eq!(p.clean, 105.0 / 0.53, epsilon = 1e-9);

        for method in [BracketingMethod::Brent, BracketingMethod::Bisection] {
            let s = SpreadSolver::new()
                .with_method(method)
                .solve(&b, &c, Quote::Clean(p.clean))
                .unwrap();
            assert_relative_eq!(s.spread_bps, -5000.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_floor_sits_at_curve_domain_edge() {
        let c = TermStructure::flat(0.03).unwrap();
        let floor = spread_floor(&bond(), &c).unwrap().unwrap();
        assert_relative_eq!(floor, -10_300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_positive_price() {
        let err = static_spread(&bond(), &curve(), Quote::Clean(-1.0)).unwrap_err();
        assert!(matches!(err, AnalyticsError::NoRoot { .. }));
    }

    #[test]
    fn test_iteration_cap() {
        let b = bond();
        let c = curve();
        let err = SpreadSolver::new()
            .with_max_iterations(2)
            .solve(&b, &c, Quote::Clean(91.3))
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::Convergence { iterations: 2, .. }));
    }
}
