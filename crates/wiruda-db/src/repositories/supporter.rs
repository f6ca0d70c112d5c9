//! PostgreSQL implementation of SupporterRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wiruda_core::entities::{Supporter, SupporterDraft, SupporterFilter, SupporterTotals};
use wiruda_core::error::DomainError;
use wiruda_core::traits::{RepoResult, SupporterRepository};

use crate::models::{SupporterModel, SupporterTotalsModel};

use super::error::{like_pattern, map_db_error};

const SUPPORTER_COLUMNS: &str = "id, name, amount, supported_on, memo, created_at, updated_at";

/// PostgreSQL implementation of SupporterRepository
#[derive(Clone)]
pub struct PgSupporterRepository {
    pool: PgPool,
}

impl PgSupporterRepository {
    /// Create a new PgSupporterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, draft: &SupporterDraft) -> RepoResult<Supporter> {
        let result = sqlx::query_as::<_, SupporterModel>(&format!(
            r#"
            INSERT INTO supporters (id, name, amount, supported_on, memo)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SUPPORTER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&draft.name)
        .bind(draft.amount)
        .bind(draft.supported_on)
        .bind(draft.memo.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into())
    }

    async fn update(&self, id: Uuid, draft: &SupporterDraft) -> RepoResult<Supporter> {
        let result = sqlx::query_as::<_, SupporterModel>(&format!(
            r#"
            UPDATE supporters
            SET name = $2, amount = $3, supported_on = $4, memo = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {SUPPORTER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&draft.name)
        .bind(draft.amount)
        .bind(draft.supported_on)
        .bind(draft.memo.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(Supporter::from)
            .ok_or(DomainError::SupporterNotFound(id))
    }
}

#[async_trait]
impl SupporterRepository for PgSupporterRepository {
    #[instrument(skip(self))]
    async fn list(&self, filter: &SupporterFilter) -> RepoResult<Vec<Supporter>> {
        let pattern = like_pattern(filter.search.as_deref());

        let rows = sqlx::query_as::<_, SupporterModel>(&format!(
            r#"
            SELECT {SUPPORTER_COLUMNS}
            FROM supporters
            WHERE ($1::text IS NULL OR name ILIKE $1 OR memo ILIKE $1)
              AND ($2::date IS NULL OR supported_on >= $2)
              AND ($3::date IS NULL OR supported_on <= $3)
              AND ($4::float8 IS NULL OR amount::float8 >= $4)
              AND ($5::float8 IS NULL OR amount::float8 <= $5)
            ORDER BY supported_on DESC, created_at DESC
            "#
        ))
        .bind(pattern.as_deref())
        .bind(filter.supported.start)
        .bind(filter.supported.end)
        .bind(filter.min_amount)
        .bind(filter.max_amount)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Supporter::from).collect())
    }

    #[instrument(skip(self, draft), fields(supporter_id = ?draft.id))]
    async fn upsert(&self, draft: &SupporterDraft) -> RepoResult<Supporter> {
        match draft.id {
            Some(id) => self.update(id, draft).await,
            None => self.insert(draft).await,
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM supporters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SupporterNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn totals(&self) -> RepoResult<SupporterTotals> {
        let result = sqlx::query_as::<_, SupporterTotalsModel>(
            "SELECT COUNT(*) AS count, COALESCE(SUM(amount), 0)::BIGINT AS amount FROM supporters",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into())
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: i64) -> RepoResult<Vec<Supporter>> {
        let rows = sqlx::query_as::<_, SupporterModel>(&format!(
            r#"
            SELECT {SUPPORTER_COLUMNS}
            FROM supporters
            ORDER BY supported_on DESC, created_at DESC
            LIMIT $1
            "#
        ))
        .bind(limit.clamp(1, 50))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Supporter::from).collect())
    }

    #[instrument(skip(self))]
    async fn supported_since(&self, since: NaiveDate) -> RepoResult<Vec<Supporter>> {
        let rows = sqlx::query_as::<_, SupporterModel>(&format!(
            r#"
            SELECT {SUPPORTER_COLUMNS}
            FROM supporters
            WHERE supported_on >= $1
            ORDER BY supported_on DESC
            "#
        ))
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Supporter::from).collect())
    }
}
