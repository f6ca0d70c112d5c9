//! Calendar month key used for monthly buckets

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month `months - 1` months before `today`'s month.
    ///
    /// A window of 1 starts at the first of the current month.
    pub fn window_start(today: NaiveDate, months: u32) -> NaiveDate {
        let first = today.with_day(1).unwrap_or(today);
        first
            .checked_sub_months(Months::new(months.saturating_sub(1)))
            .unwrap_or(first)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
