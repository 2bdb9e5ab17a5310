//! Actual-day conventions: ACT/360, ACT/365F, ACT/365L and ACT/ACT ISDA.

use rust_decimal::Decimal;

use super::{ordered, DayCount};
use crate::types::{days_in_year, is_leap_year, Date};

/// Actual/360.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365 Fixed. The basis is 365 even in leap years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365 Leap.
///
/// Whole years are counted from the start date. The remaining stub of less
/// than a year uses a basis of 366 when 29 February falls in it, 365
/// otherwise, so the fraction never falls as the end date moves later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Leap;

impl Act365Leap {
    fn contains_feb_29(start: Date, end: Date) -> bool {
        (start.year()..=end.year())
            .filter(|&year| is_leap_year(year))
            .filter_map(|year| Date::from_ymd(year, 2, 29).ok())
            .any(|feb_29| feb_29 > start && feb_29 <= end)
    }
}

impl DayCount for Act365Leap {
    fn name(&self) -> &'static str {
        "ACT/365L"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let (from, to, reversed) = ordered(start, end);

        // Anniversaries are rolled from the start date itself so that a
        // 29 February start returns to 29 February in leap years.
        let mut whole_years = 0;
        let mut anchor = from;
        while let Ok(next) = from.add_years(whole_years + 1) {
            if next > to {
                break;
            }
            whole_years += 1;
            anchor = next;
        }

        let basis = if Self::contains_feb_29(anchor, to) { 366 } else { 365 };
        let fraction = Decimal::from(whole_years)
            + Decimal::from(anchor.days_between(&to)) / Decimal::from(basis);

        if reversed {
            -fraction
        } else {
            fraction
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/Actual ISDA.
///
/// Days falling in leap years are divided by 366, all others by 365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let (from, to, reversed) = ordered(start, end);

        let fraction = if from.year() == to.year() {
            Decimal::from(from.days_between(&to)) / Decimal::from(from.days_in_year())
        } else {
            // Remainder of the first year, whole years between, head of the last year.
            let head_days = from.days_in_year() - from.day_of_year() + 1;
            let tail_days = to.day_of_year() - 1;
            let whole_years = to.year() - from.year() - 1;

            Decimal::from(head_days) / Decimal::from(from.days_in_year())
                + Decimal::from(whole_years)
                + Decimal::from(tail_days) / Decimal::from(days_in_year(to.year()))
        };

        if reversed {
            -fraction
        } else {
            fraction
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
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
    fn test_act360() {
        let start = date(2025, 1, 1);
        let end = date(2025, 7, 1);
        assert_eq!(Act360.day_count(start, end), 181);
        assert_eq!(Act360.year_fraction(start, end), dec!(181) / dec!(360));
    }

    #[test]
    fn test_act365_fixed_leap_year() {
        let start = date(2024, 1, 1);
        let end = date(2025, 1, 1);
        assert_eq!(Act365Fixed.year_fraction(start, end), dec!(366) / dec!(365));
    }

    #[test]
    fn test_act365_leap_basis() {
        assert_eq!(
            Act365Leap.year_fraction(date(2024, 1, 1), date(2025, 1, 1)),
            dec!(1)
        );
        assert_eq!(
            Act365Leap.year_fraction(date(2024, 3, 1), date(2025, 3, 1)),
            dec!(1)
        );
        // Feb 29 exactly at the start is excluded
        assert_eq!(
            Act365Leap.year_fraction(date(2024, 2, 29), date(2024, 3, 1)),
            dec!(1) / dec!(365)
        );
    }

    #[test]
    fn test_act365_leap_multi_year() {
        let start = date(2021, 3, 1);
        // Two whole years to 2023-03-01, then a stub without 29 February
        let near = Act365Leap.year_fraction(start, date(2024, 2, 28));
        assert_eq!(near, dec!(2) + dec!(364) / dec!(365));
        // The stub now holds 29 February
        let feb_29 = Act365Leap.year_fraction(start, date(2024, 2, 29));
        assert_eq!(feb_29, dec!(2) + dec!(365) / dec!(366));
        let far = Act365Leap.year_fraction(start, date(2024, 3, 1));
        assert_eq!(far, dec!(3));
        assert!(near < feb_29 && feb_29 < far);
        assert_eq!(Act365Leap.year_fraction(date(2024, 3, 1), start), -far);
    }

    #[test]
    fn test_actact_isda_same_year() {
        assert_eq!(
            ActActIsda.year_fraction(date(2024, 1, 1), date(2024, 7, 1)),
            dec!(182) / dec!(366)
        );
    }

    #[test]
    fn test_actact_isda_cross_year() {
        // 2023-07-01..2024-01-01 = 184/365, then 2024-01-01..2024-07-01 = 182/366
        let yf = ActActIsda.year_fraction(date(2023, 7, 1), date(2024, 7, 1));
        assert_eq!(yf, dec!(184) / dec!(365) + dec!(182) / dec!(366));
    }

    #[test]
    fn test_actact_isda_full_years() {
        assert_eq!(
            ActActIsda.year_fraction(date(2020, 1, 1), date(2025, 1, 1)),
            dec!(5)
        );
    }
}
