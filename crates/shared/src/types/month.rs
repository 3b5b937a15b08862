//! Calendar-month value type.
//!
//! Budgets and planning horizons are addressed by calendar month, so a
//! dedicated `YearMonth` type keeps the month arithmetic (ranges, distances)
//! in one place instead of scattering day-level date math around.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month (year + month-of-year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a `YearMonth`, returning `None` when `month` is outside 1-12.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Option<Self> {
        if matches!(month, 1..=12) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing the given date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// The month of year (1-12).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        // Month is validated at construction, day 1 always exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month.
    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap_or(NaiveDate::MAX)
    }

    /// The following month.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month.
    #[must_use]
    pub const fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns true if the given date falls within this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Number of months from this month to `target`, counting both ends.
    ///
    /// The current month counts as 1, next month as 2, and so on. A target
    /// before this month yields 0.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn months_until_inclusive(self, target: Self) -> u32 {
        let diff = (target.year - self.year) * 12 + (target.month as i32 - self.month as i32);
        if diff < 0 { 0 } else { (diff + 1) as u32 }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_month() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
        assert!(YearMonth::new(2024, 12).is_some());
    }

    #[test]
    fn test_month_range() {
        let feb = ym(2024, 2);
        assert_eq!(feb.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        // 2024 is a leap year
        assert_eq!(feb.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let dec = ym(2023, 12);
        assert_eq!(dec.last_day(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_next_and_prev_roll_over_year() {
        assert_eq!(ym(2023, 12).next(), ym(2024, 1));
        assert_eq!(ym(2024, 1).prev(), ym(2023, 12));
        assert_eq!(ym(2024, 6).next(), ym(2024, 7));
    }

    #[test]
    fn test_contains() {
        let jan = ym(2024, 1);
        assert!(jan.contains(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(jan.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()));
    }

    #[rstest]
    #[case(ym(2024, 3), ym(2024, 3), 1)] // same month counts as 1
    #[case(ym(2024, 3), ym(2024, 4), 2)]
    #[case(ym(2024, 3), ym(2025, 2), 12)]
    #[case(ym(2024, 3), ym(2024, 2), 0)] // past target
    #[case(ym(2024, 12), ym(2025, 1), 2)] // across year boundary
    fn test_months_until_inclusive(
        #[case] from: YearMonth,
        #[case] to: YearMonth,
        #[case] expected: u32,
    ) {
        assert_eq!(from.months_until_inclusive(to), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(ym(2024, 3).to_string(), "2024-03");
        assert_eq!(ym(987, 11).to_string(), "0987-11");
    }

    #[test]
    fn test_ordering() {
        assert!(ym(2023, 12) < ym(2024, 1));
        assert!(ym(2024, 1) < ym(2024, 2));
    }
}
