//! PostgreSQL implementation of InquiryRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wiruda_core::entities::{Inquiry, InquiryStatus, NewInquiry};
use wiruda_core::error::DomainError;
use wiruda_core::traits::{InquiryRepository, RepoResult};

use crate::models::InquiryModel;

use super::error::map_db_error;

const INQUIRY_COLUMNS: &str =
    "id, name, email, phone, message, status, responded_at, created_at, updated_at";

/// PostgreSQL implementation of InquiryRepository
#[derive(Clone)]
pub struct PgInquiryRepository {
    pool: PgPool,
}

impl PgInquiryRepository {
    /// Create a new PgInquiryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InquiryRepository for PgInquiryRepository {
    #[instrument(skip(self, inquiry))]
    async fn create(&self, inquiry: &NewInquiry) -> RepoResult<Inquiry> {
        let result = sqlx::query_as::<_, InquiryModel>(&format!(
            r#"
            INSERT INTO inquiries (id, name, email, phone, message, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {INQUIRY_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(inquiry.phone.as_deref())
        .bind(&inquiry.message)
        .bind(InquiryStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into())
    }

    #[instrument(skip(self))]
    async fn list(&self, status: Option<InquiryStatus>) -> RepoResult<Vec<Inquiry>> {
        let rows = sqlx::query_as::<_, InquiryModel>(&format!(
            r#"
            SELECT {INQUIRY_COLUMNS}
            FROM inquiries
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#
        ))
        .bind(status.map(InquiryStatus::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Inquiry::from).collect())
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        id: Uuid,
        status: InquiryStatus,
        responded_at: Option<DateTime<Utc>>,
    ) -> RepoResult<Inquiry> {
        let result = sqlx::query_as::<_, InquiryModel>(&format!(
            r#"
            UPDATE inquiries
            SET status = $2, responded_at = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {INQUIRY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .bind(responded_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(Inquiry::from)
            .ok_or(DomainError::InquiryNotFound(id))
    }

    #[instrument(skip(self))]
    async fn count_by_status(&self, status: InquiryStatus) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inquiries WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
