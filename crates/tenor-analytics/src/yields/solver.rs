//! Flat yield-to-maturity solver.
//!
//! Finds the yield `y` that discounts the bond's flows, compounded at the
//! coupon frequency, back to the quoted dirty price:
//!
//! ```text
//! Σ CF_i · (1 + y/f)^(-f·t_i) = dirty
//! ```
//!
//! The price is strictly decreasing in `y` on `(-f, ∞)`, so a bracket found
//! by widening the initial range always holds the single root. Newton runs
//! first with the analytic derivative and Brent takes over on the bracket
//! if it stalls.

use serde::{Deserialize, Serialize};

use tenor_bonds::instruments::StraightBond;
use tenor_bonds::pricing::{dirty_price_at_yield, dirty_price_derivative};
use tenor_math::solvers::{
    expand_bracket, hybrid, SolverConfig, DEFAULT_MAX_EXPANSIONS,
};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::quote::Quote;

const SOLVER: &str = "yield";

/// Initial yield bracket, as decimals.
pub const DEFAULT_YIELD_BRACKET: (f64, f64) = (-0.5, 1.0);

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// The yield as a decimal (0.05 for 5%).
    pub yield_value: f64,
    /// Solver iterations used.
    pub iterations: u32,
    /// Final residual in price units.
    pub residual: f64,
}

impl YieldResult {
    /// The yield in percent.
    pub fn percent(&self) -> f64 {
        self.yield_value * 100.0
    }
}

/// Yield-to-maturity solver.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::prelude::*;
/// use tenor_bonds::instruments::StraightBond;
/// use tenor_core::daycounts::DayCountConvention;
/// use tenor_core::types::{Date, Frequency};
///
/// let bond = StraightBond::new(
///     Date::from_ymd(2024, 1, 15).unwrap(),
///     Date::from_ymd(2034, 1, 15).unwrap(),
///     Frequency::SemiAnnual,
///     DayCountConvention::Thirty360E,
///     5.0,
///     100.0,
/// )
/// .unwrap();
///
/// let result = YieldSolver::new().solve(&bond, Quote::Clean(100.0)).unwrap();
/// assert!((result.percent() - 5.0).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    config: SolverConfig,
    bracket: (f64, f64),
    max_expansions: u32,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a solver with default tolerance, iteration cap and bracket.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            bracket: DEFAULT_YIELD_BRACKET,
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

    /// Sets the initial bracket, in decimal yield.
    #[must_use]
    pub fn with_bracket(mut self, lower: f64, upper: f64) -> Self {
        self.bracket = (lower, upper);
        self
    }

    /// Sets how many times the bracket may be widened.
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the flat yield reproducing `quote`.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::NoRoot` if the quote is not a positive finite
    ///   price or no bracket is found
    /// - `AnalyticsError::Convergence` if the iteration cap is hit
    pub fn solve(&self, bond: &StraightBond, quote: Quote) -> AnalyticsResult<YieldResult> {
        let target = quote.dirty(bond);
        if !target.is_finite() || target <= 0.0 {
            return Err(AnalyticsError::no_root(
                SOLVER,
                target,
                "price must be a positive number",
            ));
        }

        let frequency = f64::from(bond.periods_per_year());
        let objective = |y: f64| dirty_price_at_yield(bond, y).map_or(f64::NAN, |p| p - target);
        let derivative = |y: f64| dirty_price_derivative(bond, y).unwrap_or(f64::NAN);

        let (lo, hi) = expand_bracket(
            &objective,
            self.bracket.0,
            self.bracket.1,
            Some(-frequency),
            self.max_expansions,
        )
        .map_err(|e| AnalyticsError::from_solver(SOLVER, target, e))?;

        let guess = (bond.coupon() / 100.0).clamp(lo, hi);
        let result = hybrid(&objective, &derivative, guess, (lo, hi), &self.config)
            .map_err(|e| AnalyticsError::from_solver(SOLVER, target, e))?;

        log::debug!(
            "yield for dirty {target:.6}: {:.8}% in {} iterations, bracket [{lo}, {hi}]",
            result.root * 100.0,
            result.iterations
        );

        Ok(YieldResult {
            yield_value: result.root,
            iterations: result.iterations,
            residual: result.residual,
        })
    }
}

/// Yield to maturity in percent, solved with default settings.
pub fn yield_to_maturity(bond: &StraightBond, quote: Quote) -> AnalyticsResult<f64> {
    YieldSolver::new().solve(bond, quote).map(|r| r.percent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenor_bonds::pricing::clean_price_at_yield;
    use tenor_core::daycounts::DayCountConvention;
    use tenor_core::types::{Date, Frequency};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn bond(settlement: Date, coupon: f64) -> StraightBond {
        StraightBond::new(
            settlement,
            date(2035, 6, 15),
            Frequency::SemiAnnual,
            DayCountConvention::Thirty360US,
            coupon,
            100.0,
        )
        .unwrap()
    }

    #[test]
    fn test_par_bond() {
        let b = bond(date(2025, 6, 15), 4.0);
        let r = YieldSolver::new().solve(&b, Quote::Clean(100.0)).unwrap();
        assert_relative_eq!(r.yield_value, 0.04, epsilon = 1e-10);
    }

    #[test]
    fn test_clean_and_dirty_quotes_agree() {
        let b = bond(date(2025, 8, 1), 4.0);
        let clean = clean_price_at_yield(&b, 0.055).unwrap();
        let dirty = clean + b.accrued_interest();

        let solver = YieldSolver::new();
        let from_clean = solver.solve(&b, Quote::Clean(clean)).unwrap();
        let from_dirty = solver.solve(&b, Quote::Dirty(dirty)).unwrap();

        assert_relative_eq!(from_clean.yield_value, 0.055, epsilon = 1e-9);
        assert_relative_eq!(from_clean.yield_value, from_dirty.yield_value, epsilon = 1e-12);
    }

    #[test]
    fn test_outside_initial_bracket() {
        // A deep discount needs a yield above 100%
        let b = bond(date(2025, 6, 15), 2.0);
        let target = clean_price_at_yield(&b, 1.8).unwrap();
        let r = YieldSolver::new().solve(&b, Quote::Clean(target)).unwrap();
        assert_relative_eq!(r.yield_value, 1.8, epsilon = 1e-8);
    }

    #[test]
    fn test_negative_yield() {
        let b = bond(date(2025, 6, 15), 1.0);
        let target = clean_price_at_yield(&b, -0.01).unwrap();
        assert!(target > 100.0);
        let pct = yield_to_maturity(&b, Quote::Clean(target)).unwrap();
        assert_relative_eq!(pct, -1.0, epsilon = 1e-7);
    }

    #[test]
    fn test_non_positive_price() {
        let b = bond(date(2025, 6, 15), 4.0);
        for price in [0.0, -5.0, f64::NAN] {
            let err = YieldSolver::new().solve(&b, Quote::Dirty(price)).unwrap_err();
            assert!(matches!(err, AnalyticsError::NoRoot { .. }), "{price}");
        }
    }

    #[test]
    fn test_unreachable_without_expansion() {
        let b = bond(date(2025, 6, 15), 4.0);
        let target = clean_price_at_yield(&b, 3.0).unwrap();
        let err = YieldSolver::new()
            .with_max_expansions(0)
            .solve(&b, Quote::Clean(target))
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::NoRoot { .. }));
    }

    #[test]
    fn test_iteration_cap() {
        let b = bond(date(2025, 8, 1), 4.0);
        let err = YieldSolver::new()
            .with_max_iterations(1)
            .with_tolerance(1e-14)
            .solve(&b, Quote::Clean(87.5))
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::Convergence { .. }));
    }
}
