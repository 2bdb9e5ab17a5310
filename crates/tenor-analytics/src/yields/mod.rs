//! Yield-to-maturity from an observed price.

mod solver;

pub use solver::{yield_to_maturity, YieldResult, YieldSolver, DEFAULT_YIELD_BRACKET};
