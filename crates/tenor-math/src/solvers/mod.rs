//! Root-finding algorithms.
//!
//! | Solver | Convergence | Requires |
//! |--------|-------------|----------|
//! | [`newton_raphson`] | quadratic, may diverge | derivative |
//! | [`brent`] | superlinear, guaranteed | bracket |
//! | [`bisection`] | linear, guaranteed | bracket |
//! | [`hybrid`] | Newton, then Brent | derivative and bracket |
//!
//! # Example: YTM of an annual bond
//!
//! ```rust
//! use tenor_math::solvers::{hybrid, SolverConfig};
//!
//! // 5% coupon, 5 years, price 95
//! let price = |y: f64| {
//!     let coupons: f64 = (1..=5).map(|t| 5.0 / (1.0 + y).powi(t)).sum();
//!     coupons + 100.0 / (1.0 + y).powi(5) - 95.0
//! };
//! let d_price = |y: f64| {
//!     let coupons: f64 = (1..=5).map(|t| -f64::from(t) * 5.0 / (1.0 + y).powi(t + 1)).sum();
//!     coupons - 500.0 / (1.0 + y).powi(6)
//! };
//!
//! let result = hybrid(price, d_price, 0.05, (0.0, 0.20), &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05);
//! ```

mod bisection;
mod bracket;
mod brent;
mod hybrid;
mod newton;

pub use bisection::bisection;
pub use bracket::{expand_bracket, DEFAULT_MAX_EXPANSIONS};
pub use brent::brent;
pub use hybrid::hybrid;
pub use newton::newton_raphson;

use crate::error::MathResult;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
///
/// A solve stops once `|f(x)| < tolerance` or the bracket is narrower than
/// `tolerance`. Reaching `max_iterations` first is an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a successful root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Function value at the root.
    pub residual: f64,
}

/// Bracketing algorithm selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BracketingMethod {
    /// Brent's method.
    #[default]
    Brent,
    /// Plain interval halving.
    Bisection,
}

impl BracketingMethod {
    /// Solves `f(x) = 0` on `[a, b]` with the selected algorithm.
    pub fn solve<F>(&self, f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            BracketingMethod::Brent => brent(f, a, b, config),
            BracketingMethod::Bisection => bisection(f, a, b, config),
        }
    }

    /// Returns the name of the algorithm.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            BracketingMethod::Brent => "brent",
            BracketingMethod::Bisection => "bisection",
        }
    }
}
