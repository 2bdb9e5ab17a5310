//! Observed prices.

use serde::{Deserialize, Serialize};

use tenor_bonds::instruments::StraightBond;

/// A market price, tagged with whether it includes accrued interest.
///
/// Solvers always work against the dirty price; a clean quote has the
/// bond's accrued interest added back first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "price", rename_all = "lowercase")]
pub enum Quote {
    /// Price excluding accrued interest.
    Clean(f64),
    /// Price including accrued interest.
    Dirty(f64),
}

impl Quote {
    /// The quoted number as given.
    pub fn value(&self) -> f64 {
        match *self {
            Quote::Clean(p) | Quote::Dirty(p) => p,
        }
    }

    /// The dirty price this quote implies for `bond`.
    pub fn dirty(&self, bond: &StraightBond) -> f64 {
        match *self {
            Quote::Clean(p) => p + bond.accrued_interest(),
            Quote::Dirty(p) => p,
        }
    }
}
