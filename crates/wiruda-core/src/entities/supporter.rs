//! Supporter record - an admin-managed donation entry

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::value_objects::DateRange;

/// Supporter entity. `amount` is in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supporter {
    pub id: Uuid,
    pub name: String,
    pub amount: i64,
    pub supported_on: NaiveDate,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert-or-update payload. `id` selects update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupporterDraft {
    pub id: Option<Uuid>,
    pub name: String,
    pub amount: i64,
    pub supported_on: NaiveDate,
    pub memo: Option<String>,
}

/// Supporter list/export filter
#[derive(Debug, Clone, Default)]
pub struct SupporterFilter {
    /// Matched against name and memo
    pub search: Option<String>,
    /// Applied to `supported_on`
    pub supported: DateRange,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

/// Supporter count and amount sum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupporterTotals {
    pub count: i64,
    pub amount: i64,
}
