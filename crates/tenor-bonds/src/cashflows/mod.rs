//! Coupon schedules and the cash flows paid on them.

mod schedule;

pub use schedule::{BondSchedule, CashFlowDate};

use serde::{Deserialize, Serialize};
use tenor_core::types::Date;

/// One scheduled payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date.
    pub date: Date,
    /// Year fraction from settlement.
    pub years: f64,
    /// Coupon paid on this date.
    pub coupon: f64,
    /// Principal repaid on this date (redemption on the final flow, zero otherwise).
    pub principal: f64,
}

impl CashFlow {
    /// Total amount paid.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.coupon + self.principal
    }
}
