//! Price sensitivity measures.

mod duration;

pub(crate) use duration::curve_yield;
pub use duration::{
    macaulay_duration, macaulay_duration_at_yield, modified_duration, modified_duration_at_yield,
};
