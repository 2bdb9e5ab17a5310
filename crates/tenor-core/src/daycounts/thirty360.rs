//! 30/360 day count conventions.

use rust_decimal::Decimal;

use super::{ordered, DayCount};
use crate::types::Date;

#[inline]
fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}

/// 360·ΔY + 30·ΔM + ΔD on already-adjusted day numbers.
#[inline]
fn thirty_day_months(start: Date, end: Date, d1: i64, d2: i64) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    360 * years + 30 * months + (d2 - d1)
}

/// Counts a forward interval with `adjust` and negates for reversed input.
fn signed_count(start: Date, end: Date, adjust: fn(Date, Date) -> (i64, i64)) -> i64 {
    let (from, to, reversed) = ordered(start, end);
    let (d1, d2) = adjust(from, to);
    let days = thirty_day_months(from, to, d1, d2);
    if reversed {
        -days
    } else {
        days
    }
}

/// 30/360 US (bond basis).
///
/// 1. If D1 is the last day of February, D1 = 30.
/// 2. If D1 is 31, D1 = 30.
/// 3. If D2 is the last day of February and D1 was too, D2 = 30.
/// 4. If D2 is 31 and D1 is now 30, D2 = 30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        signed_count(start, end, |start, end| {
            let start_feb_eom = is_last_day_of_february(start);
            let mut d1 = i64::from(start.day());
            let mut d2 = i64::from(end.day());

            if start_feb_eom || d1 == 31 {
                d1 = 30;
            }
            if (start_feb_eom && is_last_day_of_february(end)) || (d2 == 31 && d1 == 30) {
                d2 = 30;
            }
            (d1, d2)
        })
    }
}

/// 30E/360 (Eurobond basis). Day 31 becomes 30 on either end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360E;

impl DayCount for Thirty360E {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        signed_count(start, end, |start, end| {
            (i64::from(start.day().min(30)), i64::from(end.day().min(30)))
        })
    }
}

/// 30E/360 ISDA.
///
/// Any month end, February included, counts as day 30 on either side. The
/// ISDA exemption for a final February maturity date is not applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360EIsda;

impl DayCount for Thirty360EIsda {
    fn name(&self) -> &'static str {
        "30E/360 ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        signed_count(start, end, |start, end| {
            let d1 = if start.is_end_of_month() { 30 } else { start.day() };
            let d2 = if end.is_end_of_month() { 30 } else { end.day() };
            (i64::from(d1), i64::from(d2))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_full_year_is_exactly_one() {
        let start = date(2024, 1, 1);
        let end = date(2025, 1, 1);

        assert_eq!(Thirty360US.year_fraction(start, end), dec!(1));
        assert_eq!(Thirty360E.year_fraction(start, end), dec!(1));
        assert_eq!(Thirty360EIsda.year_fraction(start, end), dec!(1));
    }

    #[test]
    fn test_thirty360us_feb_eom() {
        // D1 is Feb EOM so D1 = 30, then D2 = 31 -> 30
        assert_eq!(Thirty360US.day_count(date(2025, 2, 28), date(2025, 3, 31)), 30);
        // Both ends Feb EOM
        assert_eq!(Thirty360US.day_count(date(2024, 2, 29), date(2025, 2, 28)), 360);
    }

    #[test]
    fn test_thirty360us_d2_31_kept_when_d1_below_30() {
        assert_eq!(Thirty360US.day_count(date(2025, 1, 15), date(2025, 3, 31)), 76);
    }

    #[test]
    fn test_thirty360us_accrued_days() {
        assert_eq!(Thirty360US.day_count(date(2019, 12, 15), date(2020, 4, 29)), 134);
    }

    #[test]
    fn test_thirty360e_ignores_february() {
        // Feb 28 stays 28 under 30E/360
        assert_eq!(Thirty360E.day_count(date(2025, 2, 28), date(2025, 3, 31)), 32);
        assert_eq!(Thirty360E.day_count(date(2025, 1, 31), date(2025, 3, 31)), 60);
    }

    #[test]
    fn test_thirty360e_isda_month_end() {
        assert_eq!(Thirty360EIsda.day_count(date(2025, 2, 28), date(2025, 3, 31)), 30);
        assert_eq!(Thirty360EIsda.day_count(date(2024, 2, 28), date(2024, 3, 31)), 32);
    }

    #[test]
    fn test_half_year() {
        assert_eq!(
            Thirty360E.year_fraction(date(2024, 1, 15), date(2024, 7, 15)),
            dec!(0.5)
        );
    }

    #[test]
    fn test_reversed() {
        let a = date(2025, 2, 28);
        let b = date(2025, 3, 31);
        assert_eq!(Thirty360US.day_count(b, a), -30);
        assert_eq!(Thirty360E.day_count(b, a), -32);
    }
}
