//! Inclusive calendar date range parsed from `YYYY-MM-DD` query values

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use crate::error::DomainError;

/// Inclusive date range; either end may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Parse optional `YYYY-MM-DD` bounds. Blank values are treated as absent.
    ///
    /// A start after the end is rejected with `InvalidDateRange`.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, DomainError> {
        let range = Self {
            start: parse_day(start)?,
            end: parse_day(end)?,
        };
        if range.is_inverted() {
            return Err(DomainError::InvalidDateRange);
        }
        Ok(range)
    }

    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }

    /// First instant of the start day
    pub fn start_at(&self) -> Option<DateTime<Utc>> {
        self.start.map(|d| d.and_time(NaiveTime::MIN).and_utc())
    }

    /// First instant after the end day, for `< end_before` timestamp filters
    pub fn end_before(&self) -> Option<DateTime<Utc>> {
        self.end
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start.map_or(true, |s| day >= s) && self.end.map_or(true, |e| day <= e)
    }
}

/// Strict `YYYY-MM-DD`: exactly ten characters and a real calendar day
pub fn parse_day(value: Option<&str>) -> Result<Option<NaiveDate>, DomainError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if raw.len() != 10 {
        return Err(invalid_day(raw));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| invalid_day(raw))
}

fn invalid_day(raw: &str) -> DomainError {
    DomainError::ValidationError(format!("Invalid date (expected YYYY-MM-DD): {raw}"))
}
