//! Error types for the analytics layer.

use thiserror::Error;

use tenor_bonds::BondError;
use tenor_core::CoreError;
use tenor_curves::CurveError;
use tenor_math::error::MathError;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors raised while solving for yields and spreads.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    // ========== Solver Errors ==========
    /// The target price cannot be reached by any yield or spread.
    #[error("{solver}: no root for target price {target}: {reason}")]
    NoRoot {
        /// Which solve failed.
        solver: &'static str,
        /// Dirty target price.
        target: f64,
        /// Reason for failure.
        reason: String,
    },

    /// The iteration cap was hit before the tolerance was met.
    #[error("{solver}: failed to converge after {iterations} iterations (residual: {residual:.2e})")]
    Convergence {
        /// Which solve failed.
        solver: &'static str,
        /// Iterations performed.
        iterations: u32,
        /// Final residual in price units.
        residual: f64,
    },

    // ========== Wrapped Errors ==========
    /// Bond, schedule or flat-yield error.
    #[error(transparent)]
    Bond(#[from] BondError),

    /// Curve error.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Date or day count error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AnalyticsError {
    /// Creates a no-root error.
    #[must_use]
    pub fn no_root(solver: &'static str, target: f64, reason: impl Into<String>) -> Self {
        Self::NoRoot {
            solver,
            target,
            reason: reason.into(),
        }
    }

    /// Classifies a root-finder failure.
    ///
    /// Running out of iterations is a convergence failure; every other
    /// failure (no sign change, or the objective undefined somewhere in
    /// the search range) means the target is out of reach.
    pub(crate) fn from_solver(solver: &'static str, target: f64, err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::Convergence {
                solver,
                iterations,
                residual,
            },
            other => Self::no_root(solver, target, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_math_errors() {
        let err = AnalyticsError::from_solver("yield", 99.0, MathError::convergence_failed(5, 1e-3));
        assert!(matches!(err, AnalyticsError::Convergence { iterations: 5, .. }));

        let err = AnalyticsError::from_solver(
            "spread",
            99.0,
            MathError::BracketNotFound {
                a: -1000.0,
                b: 10000.0,
                expansions: 12,
            },
        );
        assert!(matches!(err, AnalyticsError::NoRoot { solver: "spread", .. }));
        assert!(err.to_string().contains("12 expansions"));
    }

    #[test]
    fn test_wraps_lower_layers() {
        let err: AnalyticsError = BondError::invalid_schedule("maturity before settlement").into();
        assert!(err.to_string().contains("maturity before settlement"));
    }
}
