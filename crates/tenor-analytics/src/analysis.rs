//! Full valuation of a bond against a curve.

use serde::Serialize;

use tenor_bonds::instruments::StraightBond;
use tenor_bonds::pricing::price;
use tenor_core::types::Date;
use tenor_curves::TermStructure;

use crate::error::AnalyticsResult;
use crate::quote::Quote;
use crate::risk::{curve_yield, macaulay_duration_at_yield, modified_duration_at_yield};
use crate::spreads::SpreadSolver;
use crate::yields::YieldSolver;

/// Where the price used for the yield and spread solves came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    /// Supplied by the caller.
    Quoted,
    /// The clean price off the curve.
    Computed,
}

/// Every number reported for a bond valuation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondAnalysis {
    /// Settlement date.
    pub settlement: Date,
    /// Maturity date.
    pub maturity: Date,
    /// Year fraction from settlement to maturity.
    pub years_to_maturity: f64,
    /// Annual coupon in percent.
    pub coupon: f64,
    /// Coupons per year.
    pub frequency: u32,
    /// Day count convention name.
    pub day_count: &'static str,
    /// Redemption value.
    pub redemption: f64,
    /// Spread applied to the curve for the curve price, in bps.
    pub spread_bps: f64,
    /// Dirty price off the curve.
    pub dirty: f64,
    /// Accrued interest.
    pub accrued: f64,
    /// Clean price off the curve.
    pub clean: f64,
    /// Modified duration at the curve-equivalent flat yield.
    pub modified_duration: f64,
    /// Macaulay duration in years.
    pub macaulay_duration: f64,
    /// Clean price the yield and spread were solved for.
    pub price: f64,
    /// Whether `price` was quoted or computed.
    pub price_source: PriceSource,
    /// Yield to maturity in percent.
    pub yield_to_maturity: f64,
    /// Spread over the curve implied by `price`, in bps.
    pub implied_spread_bps: f64,
}

/// Runs pricing, duration and both solves with one set of solver settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BondAnalyzer {
    yield_solver: YieldSolver,
    spread_solver: SpreadSolver,
}

impl BondAnalyzer {
    /// Creates an analyzer with default solvers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the yield solver.
    #[must_use]
    pub fn with_yield_solver(mut self, solver: YieldSolver) -> Self {
        self.yield_solver = solver;
        self
    }

    /// Replaces the spread solver.
    #[must_use]
    pub fn with_spread_solver(mut self, solver: SpreadSolver) -> Self {
        self.spread_solver = solver;
        self
    }

    /// Values `bond` off `curve` shifted by `spread_bps`.
    ///
    /// With a `quote` (a clean price), yield and implied spread are solved
    /// for the quote; otherwise for the computed clean price.
    pub fn analyze(
        &self,
        bond: &StraightBond,
        curve: &TermStructure,
        spread_bps: f64,
        quote: Option<f64>,
    ) -> AnalyticsResult<BondAnalysis> {
        let p = price(bond, curve, spread_bps)?;

        let y_curve = curve_yield(bond, curve, spread_bps, &self.yield_solver)?;
        let modified_duration = modified_duration_at_yield(bond, y_curve)?;
        let macaulay_duration = macaulay_duration_at_yield(bond, y_curve)?;

        let (used, price_source) = match quote {
            Some(q) => (q, PriceSource::Quoted),
            None => (p.clean, PriceSource::Computed),
        };
        let yield_to_maturity = self.yield_solver.solve(bond, Quote::Clean(used))?.percent();
        let implied_spread_bps = self
            .spread_solver
            .solve(bond, curve, Quote::Clean(used))?
            .spread_bps;

        let schedule = bond.schedule();
        Ok(BondAnalysis {
            settlement: schedule.settlement(),
            maturity: schedule.maturity(),
            years_to_maturity: bond.years_to_maturity(),
            coupon: bond.coupon(),
            frequency: bond.periods_per_year(),
            day_count: schedule.convention().name(),
            redemption: bond.redemption(),
            spread_bps,
            dirty: p.dirty,
            accrued: p.accrued,
            clean: p.clean,
            modified_duration,
            macaulay_duration,
            price: used,
            price_source,
            yield_to_maturity,
            implied_spread_bps,
        })
    }
}

/// [`BondAnalyzer::analyze`] with default solvers.
pub fn analyze(
    bond: &StraightBond,
    curve: &TermStructure,
    spread_bps: f64,
    quote: Option<f64>,
) -> AnalyticsResult<BondAnalysis> {
    BondAnalyzer::new().analyze(bond, curve, spread_bps, quote)
}
