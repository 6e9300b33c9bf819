use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

pub const PROJECTION_MONTHS: u32 = 12;

/// A calendar month, formatted as `YYYY-MM`. `month` is always in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns `None` when `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// The month `offset` months after this one, wrapping across years.
    pub fn plus_months(self, offset: u32) -> Self {
        let shifted = self.month - 1 + offset;
        Self {
            year: self.year + (shifted / 12) as i32,
            month: shifted % 12 + 1,
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One month of the forward-looking schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionRow {
    pub year_month: YearMonth,
    pub rent_amount: Decimal,
    pub contract_installment_amount: Decimal,
    pub total_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_months() {
        assert!(YearMonth::new(2025, 0).is_none());
        assert!(YearMonth::new(2025, 13).is_none());
        assert!(YearMonth::new(2025, u32::MAX).is_none());
        let december = YearMonth::new(2025, 12).unwrap();
        assert_eq!((december.year(), december.month()), (2025, 12));
    }

    #[test]
    fn dates_always_yield_valid_months() {
        for month in 1..=12 {
            let date = NaiveDate::from_ymd_opt(2024, month, 28).unwrap();
            let year_month = YearMonth::from_date(date);
            assert_eq!(year_month.month(), month);
            assert!((1..=12).contains(&year_month.plus_months(11).month()));
        }
    }

    #[test]
    fn wraps_into_following_year() {
        let november = YearMonth::new(2025, 11).unwrap();
        assert_eq!(november.plus_months(1), YearMonth::new(2025, 12).unwrap());
        assert_eq!(november.plus_months(2), YearMonth::new(2026, 1).unwrap());
        assert_eq!(november.plus_months(12), YearMonth::new(2026, 11).unwrap());
        assert_eq!(november.plus_months(26), YearMonth::new(2028, 1).unwrap());
    }

    #[test]
    fn formats_with_padding() {
        assert_eq!(YearMonth::new(2026, 3).unwrap().to_string(), "2026-03");
    }
}
