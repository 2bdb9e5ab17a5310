//! Bond instruments.

mod straight;

pub use straight::StraightBond;
