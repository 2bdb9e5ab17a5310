//! Value command implementation.
//!
//! Prices a straight bond off the NSS curve, then solves yield-to-maturity
//! and implied spread for either a quoted clean price or the computed one.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use tenor_analytics::prelude::*;
use tenor_bonds::cashflows::BondSchedule;
use tenor_bonds::instruments::StraightBond;
use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::Date;
use tenor_curves::TermStructure;

use crate::cli::OutputFormat;
use crate::commands::TermFileArg;
use crate::output::{format_price, print_header, print_output, print_single, KeyValue};
use crate::term_file;

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Settlement date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub settlement: Option<Date>,

    /// Maturity date (YYYY-MM-DD). Defaults to one year from today.
    #[arg(long)]
    pub maturity: Option<Date>,

    /// Annual coupon rate in percent (5.0 for 5%)
    #[arg(long, default_value_t = 0.0)]
    pub coupon: f64,

    /// Coupon payments per year: 1, 2, 3, 4, 6 or 12
    #[arg(short = 'n', long, default_value_t = 1)]
    pub frequency: i32,

    /// Quoted clean price; zero or below values the bond at its curve price
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub quote: f64,

    /// Redemption value
    #[arg(long, default_value_t = 100.0)]
    pub redemption: f64,

    /// Spread over the curve in basis points
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub spread: f64,

    #[command(flatten)]
    pub term_file: TermFileArg,

    /// Day count convention: 30/360, 30E/360, 30E/360 ISDA, ACT/360,
    /// ACT/365F, ACT/365L or ACT/ACT ISDA (compact forms such as 30E360
    /// and ACTACT are accepted)
    #[arg(long, default_value = "30E360")]
    pub daycount: DayCountConvention,

    /// Show cashflows
    #[arg(long)]
    pub cashflows: bool,

    /// Root finder for the implied spread
    #[arg(long, value_enum, default_value = "brent")]
    pub spread_method: SpreadMethod,

    /// Solver tolerance in price units
    #[arg(long, default_value_t = 1e-10)]
    pub tolerance: f64,

    /// Solver iteration cap
    #[arg(long, default_value_t = 100)]
    pub max_iterations: u32,
}

/// Root finder choice for the spread solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpreadMethod {
    /// Brent's method
    Brent,
    /// Bisection
    Bisection,
}

impl From<SpreadMethod> for BracketingMethod {
    fn from(method: SpreadMethod) -> Self {
        match method {
            SpreadMethod::Brent => BracketingMethod::Brent,
            SpreadMethod::Bisection => BracketingMethod::Bisection,
        }
    }
}

/// One row of the cashflow table.
#[derive(Debug, Serialize, Tabled)]
struct CashflowRow {
    #[tabled(rename = "Date")]
    date: Date,
    #[tabled(rename = "Years", display_with = "format_price")]
    years: f64,
    #[tabled(rename = "Coupon", display_with = "format_price")]
    coupon: f64,
    #[tabled(rename = "Principal", display_with = "format_price")]
    principal: f64,
    #[tabled(rename = "DF", display_with = "format_price")]
    discount_factor: f64,
    #[tabled(rename = "PV", display_with = "format_price")]
    present_value: f64,
}

#[derive(Serialize)]
struct ValueWithCashflows<'a> {
    analysis: &'a BondAnalysis,
    cash_flows: &'a [CashflowRow],
}

/// Execute the value command.
pub fn execute(args: ValueArgs, format: OutputFormat) -> Result<()> {
    let curve = match term_file::load(&args.term_file.path) {
        Ok(curve) => curve,
        Err(err) => {
            tracing::warn!("{err}");
            tracing::warn!("save the template below as a term file and edit it");
            println!("{}", term_file::template()?);
            return Ok(());
        }
    };

    let today = Date::today();
    let settlement = args.settlement.unwrap_or(today);
    let maturity = match args.maturity {
        Some(maturity) => maturity,
        None => today.add_years(1)?,
    };

    let schedule =
        BondSchedule::with_periods_per_year(settlement, maturity, args.frequency, args.daycount)?;
    let bond = StraightBond::from_schedule(schedule, args.coupon, args.redemption)?;

    let analyzer = BondAnalyzer::new()
        .with_yield_solver(
            YieldSolver::new()
                .with_tolerance(args.tolerance)
                .with_max_iterations(args.max_iterations),
        )
        .with_spread_solver(
            SpreadSolver::new()
                .with_method(args.spread_method.into())
                .with_tolerance(args.tolerance)
                .with_max_iterations(args.max_iterations),
        );
    let quote = (args.quote > 0.0).then_some(args.quote);
    let analysis = analyzer.analyze(&bond, &curve, args.spread, quote)?;

    let rows = if args.cashflows {
        cashflow_rows(&bond, &curve, args.spread)?
    } else {
        Vec::new()
    };

    match format {
        OutputFormat::Table => {
            print_report(&analysis)?;
            if args.cashflows {
                print_header("Cashflows");
                print_output(&rows, format)?;
            }
        }
        OutputFormat::Json => {
            if args.cashflows {
                let combined = ValueWithCashflows {
                    analysis: &analysis,
                    cash_flows: &rows,
                };
                println!("{}", serde_json::to_string_pretty(&combined)?);
            } else {
                print_single(&analysis, format)?;
            }
        }
        OutputFormat::Csv => {
            print_single(&analysis, format)?;
            if args.cashflows {
                println!();
                print_output(&rows, format)?;
            }
        }
    }

    Ok(())
}

fn print_report(a: &BondAnalysis) -> Result<()> {
    let results = vec![
        KeyValue::new("Settlement Date", a.settlement.to_string()),
        KeyValue::new("Maturity Date", a.maturity.to_string()),
        KeyValue::from_f64("Years to Maturity", a.years_to_maturity, 4),
        KeyValue::from_f64("Modified Duration", a.modified_duration, 4),
        KeyValue::from_f64("Macaulay Duration", a.macaulay_duration, 4),
        KeyValue::new("Coupon", format!("{:.4}%", a.coupon)),
        KeyValue::new("Frequency", a.frequency.to_string()),
        KeyValue::new("Day Convention", a.day_count),
        KeyValue::new("Spread", format!("{:.2} bps", a.spread_bps)),
        KeyValue::from_f64("Dirty Price", a.dirty, 6),
        KeyValue::from_f64("[-] Accrued", a.accrued, 6),
        KeyValue::from_f64("[=] Clean Price", a.clean, 6),
    ];
    print_header("Bond Valuation");
    print_output(&results, OutputFormat::Table)?;

    let title = match a.price_source {
        PriceSource::Quoted => "Yields for the quoted price",
        PriceSource::Computed => "Yields for the calculated clean price",
    };
    let yields = vec![
        KeyValue::from_f64("Price", a.price, 6),
        KeyValue::new("Yield to Maturity", format!("{:.6}%", a.yield_to_maturity)),
        KeyValue::new("Implied Spread", format!("{:.4} bps", a.implied_spread_bps)),
    ];
    print_header(title);
    print_output(&yields, OutputFormat::Table)
}

fn cashflow_rows(
    bond: &StraightBond,
    curve: &TermStructure,
    spread_bps: f64,
) -> Result<Vec<CashflowRow>> {
    bond.cash_flows()
        .into_iter()
        .map(|cf| -> Result<CashflowRow> {
            let df = curve.discount_factor(cf.years, spread_bps)?;
            Ok(CashflowRow {
                date: cf.date,
                years: cf.years,
                coupon: cf.coupon,
                principal: cf.principal,
                discount_factor: df,
                present_value: cf.amount() * df,
            })
        })
        .collect()
}
