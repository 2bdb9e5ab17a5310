//! # Tenor Curves
//!
//! The Nelson-Siegel-Svensson (NSS) term structure.
//!
//! A [`TermStructure`] holds six validated parameters and maps a time in
//! years to a zero rate, an instantaneous forward rate, and a discount
//! factor. Discounting is annually compounded throughout:
//!
//! ```text
//! DF(t) = (1 + r(t) + spread_bps / 10_000) ^ (-t)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tenor_curves::TermStructure;
//!
//! let curve = TermStructure::flat(0.03).unwrap();
//! let df = curve.discount_factor(1.0, 0.0).unwrap();
//! assert!((df - 1.0 / 1.03).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]

pub mod error;
mod nss;

pub use error::{CurveError, CurveResult};
pub use nss::{TermStructure, BPS_PER_UNIT};
