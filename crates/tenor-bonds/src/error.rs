//! Error types for bond operations.

use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Maturity not after settlement, or an unusable coupon frequency.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of what's invalid.
        reason: String,
    },

    /// Coupon or redemption outside their valid range.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Flat yield outside the domain of periodic discounting.
    #[error("Invalid yield {value}: {reason}")]
    InvalidYield {
        /// The yield, as a decimal.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Date or day count error.
    #[error(transparent)]
    Core(#[from] tenor_core::CoreError),

    /// Curve error.
    #[error(transparent)]
    Curve(#[from] tenor_curves::CurveError),
}

impl BondError {
    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }
}
