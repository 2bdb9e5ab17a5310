//! Spread over the curve implied by an observed price.

mod static_spread;

pub use static_spread::{static_spread, SpreadResult, SpreadSolver, DEFAULT_SPREAD_BRACKET};
