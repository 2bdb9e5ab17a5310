//! # Tenor Core
//!
//! Foundational types shared by every Tenor crate:
//!
//! - **Types**: [`Date`](types::Date) and [`Frequency`](types::Frequency)
//! - **Day Count Conventions**: exact year fractions between two dates
//! - **Errors**: [`CoreError`](error::CoreError) for invalid dates and unknown conventions
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 1, 1).unwrap();
//!
//! let convention: DayCountConvention = "30E360".parse().unwrap();
//! assert_eq!(convention.year_fraction(start, end), dec!(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Frequency};
}

pub use error::{CoreError, CoreResult};
