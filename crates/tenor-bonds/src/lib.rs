//! # Tenor Bonds
//!
//! Fixed-coupon bonds for the Tenor bond valuation library.
//!
//! This crate provides:
//!
//! - **Cash Flows**: coupon schedules rolled back from maturity, accrual fractions
//! - **Instruments**: [`StraightBond`](instruments::StraightBond), a bullet bond
//!   with a fixed coupon
//! - **Pricing**: dirty and clean price off an NSS curve with a static spread,
//!   and flat-yield pricing
//!
//! ## Example
//!
//! ```rust
//! use tenor_bonds::prelude::*;
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
//!
//! let curve = TermStructure::flat(0.03).unwrap();
//! let p = price(&bond, &curve, 0.0).unwrap();
//! assert!((p.clean - 101.94).abs() < 0.01);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{BondSchedule, CashFlow, CashFlowDate};
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::StraightBond;
    pub use crate::pricing::{
        clean_price_at_yield, dirty_price_at_yield, dirty_price_derivative, price, present_value,
        weighted_time_at_yield, BondPrice,
    };
}

pub use error::{BondError, BondResult};
