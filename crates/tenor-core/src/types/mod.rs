//! Domain types.

mod date;
mod frequency;

pub use date::{days_in_month, days_in_year, is_leap_year, Date};
pub use frequency::Frequency;
