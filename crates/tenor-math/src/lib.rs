//! # Tenor Math
//!
//! One-dimensional root finders used to invert bond prices into yields
//! and spreads.
//!
//! - **Bracketing**: [`bisection`](solvers::bisection) and [`brent`](solvers::brent)
//! - **Open**: [`newton_raphson`](solvers::newton_raphson)
//! - **Hybrid**: Newton with a Brent fallback, see [`hybrid`](solvers::hybrid)
//! - **Bracket search**: [`expand_bracket`](solvers::expand_bracket)
//!
//! Every solver is bounded by [`SolverConfig`](solvers::SolverConfig) and
//! reports failure through [`MathError`](error::MathError) instead of
//! looping or returning a non-finite root.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, brent, expand_bracket, hybrid, newton_raphson, BracketingMethod,
        SolverConfig, SolverResult,
    };
}
