//! # Tenor Analytics
//!
//! Market-implied measures for straight bonds:
//!
//! - **Yields**: flat yield-to-maturity from a clean or dirty quote
//! - **Spreads**: static spread over an NSS curve
//! - **Risk**: modified and Macaulay duration
//! - **Analysis**: every reported number for one bond in one call
//!
//! ## Architecture
//!
//! `tenor-analytics` depends on `tenor-bonds` for instruments and pricing
//! and on `tenor-math` for the root finders; neither depends back on this
//! crate. Both solvers work against the dirty price: a clean quote has the
//! bond's accrued interest added before solving.
//!
//! ## Usage
//!
//! ```rust
//! use tenor_analytics::prelude::*;
//! use tenor_bonds::instruments::StraightBond;
//! use tenor_core::daycounts::DayCountConvention;
//! use tenor_core::types::{Date, Frequency};
//! use tenor_curves::TermStructure;
//!
//! let bond = StraightBond::new(
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2025, 1, 1).unwrap(),
//!     Frequency::Annual,
//!     DayCountConvention::Thirty360E,
//!     5.0,
//!     100.0,
//! )
//! .unwrap();
//! let curve = TermStructure::flat(0.03).unwrap();
//!
//! let analysis = analyze(&bond, &curve, 0.0, Some(100.0)).unwrap();
//! assert!((analysis.yield_to_maturity - 5.0).abs() < 1e-6);
//! assert!((analysis.implied_spread_bps - 200.0).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod analysis;
pub mod error;
pub mod quote;
pub mod risk;
pub mod spreads;
pub mod yields;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::{analyze, BondAnalysis, BondAnalyzer, PriceSource};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::quote::Quote;
    pub use crate::risk::{
        macaulay_duration, macaulay_duration_at_yield, modified_duration,
        modified_duration_at_yield,
    };
    pub use crate::spreads::{static_spread, SpreadResult, SpreadSolver};
    pub use crate::yields::{yield_to_maturity, YieldResult, YieldSolver};
    pub use tenor_math::solvers::BracketingMethod;
}
