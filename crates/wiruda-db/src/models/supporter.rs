//! Supporter database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for supporters table
#[derive(Debug, Clone, FromRow)]
pub struct SupporterModel {
    pub id: Uuid,
    pub name: String,
    pub amount: i64,
    pub supported_on: NaiveDate,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, FromRow)]
pub struct SupporterTotalsModel {
    pub count: i64,
    pub amount: i64,
}
