//! PostgreSQL implementation of PrayerRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wiruda_core::entities::{
    NewPrayer, Prayer, PrayerChanges, PrayerDetail, PrayerFilter, PrayerSummary,
};
use wiruda_core::error::DomainError;
use wiruda_core::traits::{PrayerRepository, RepoResult};
use wiruda_core::value_objects::{Page, PageRequest};

use crate::models::{PrayerModel, PrayerRowModel};

use super::error::{like_pattern, map_db_error};

/// Prayer columns, author columns and reaction counts, joined for list and detail reads
macro_rules! prayer_row_select {
    () => {
        r#"
        SELECT pr.id, pr.author_id, pr.content, pr.image_url, pr.is_answered, pr.answered_at,
               pr.created_at, pr.updated_at,
               p.full_name AS author_full_name, p.role AS author_role, p.status AS author_status,
               (SELECT COUNT(*) FROM prayer_reactions r
                 WHERE r.prayer_id = pr.id AND r.reaction_type = 'amen') AS amen_count,
               (SELECT COUNT(*) FROM prayer_reactions r
                 WHERE r.prayer_id = pr.id AND r.reaction_type = 'together') AS together_count
        FROM prayers pr
        LEFT JOIN profiles p ON p.id = pr.author_id
        "#
    };
}

/// $1 search pattern, $2 answered state
macro_rules! prayer_filter {
    () => {
        r#"
        WHERE ($1::text IS NULL OR pr.content ILIKE $1 OR p.full_name ILIKE $1)
          AND ($2::boolean IS NULL OR pr.is_answered = $2)
        "#
    };
}

const PRAYER_COLUMNS: &str =
    "id, author_id, content, image_url, is_answered, answered_at, created_at, updated_at";

/// PostgreSQL implementation of PrayerRepository
#[derive(Clone)]
pub struct PgPrayerRepository {
    pool: PgPool,
}

impl PgPrayerRepository {
    /// Create a new PgPrayerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrayerRepository for PgPrayerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Prayer>> {
        let result = sqlx::query_as::<_, PrayerModel>(&format!(
            "SELECT {PRAYER_COLUMNS} FROM prayers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Prayer::from))
    }

    #[instrument(skip(self))]
    async fn find_detail(&self, id: Uuid) -> RepoResult<Option<PrayerDetail>> {
        let result =
            sqlx::query_as::<_, PrayerRowModel>(concat!(prayer_row_select!(), "WHERE pr.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.map(PrayerDetail::from))
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: &PrayerFilter,
        page: PageRequest,
    ) -> RepoResult<Page<PrayerSummary>> {
        let pattern = like_pattern(filter.search.as_deref());
        let answered = filter.status.answered();

        let total = sqlx::query_scalar::<_, i64>(concat!(
            r#"
            SELECT COUNT(*)
            FROM prayers pr
            LEFT JOIN profiles p ON p.id = pr.author_id
            "#,
            prayer_filter!()
        ))
        .bind(pattern.as_deref())
        .bind(answered)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, PrayerRowModel>(concat!(
            prayer_row_select!(),
            prayer_filter!(),
            r#"
            ORDER BY pr.created_at DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(pattern.as_deref())
        .bind(answered)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(PrayerSummary::from).collect(),
            total,
            page,
        ))
    }

    #[instrument(skip(self, prayer), fields(author_id = %prayer.author_id))]
    async fn create(&self, prayer: &NewPrayer) -> RepoResult<Prayer> {
        let result = sqlx::query_as::<_, PrayerModel>(&format!(
            r#"
            INSERT INTO prayers (id, author_id, content, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING {PRAYER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(prayer.author_id)
        .bind(&prayer.content)
        .bind(prayer.image_url.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into())
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: Uuid, changes: &PrayerChanges) -> RepoResult<Prayer> {
        let result = sqlx::query_as::<_, PrayerModel>(&format!(
            r#"
            UPDATE prayers
            SET content = $2, image_url = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {PRAYER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&changes.content)
        .bind(changes.image_url.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Prayer::from).ok_or(DomainError::PrayerNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM prayers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PrayerNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_answered(
        &self,
        id: Uuid,
        answered: bool,
        answered_at: Option<DateTime<Utc>>,
    ) -> RepoResult<Prayer> {
        let result = sqlx::query_as::<_, PrayerModel>(&format!(
            r#"
            UPDATE prayers
            SET is_answered = $2, answered_at = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {PRAYER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(answered)
        .bind(answered_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Prayer::from).ok_or(DomainError::PrayerNotFound(id))
    }

    #[instrument(skip(self))]
    async fn count_all(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM prayers")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_answered(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM prayers WHERE is_answered")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: i64) -> RepoResult<Vec<PrayerSummary>> {
        let rows = sqlx::query_as::<_, PrayerRowModel>(concat!(
            prayer_row_select!(),
            "ORDER BY pr.created_at DESC LIMIT $1"
        ))
        .bind(limit.clamp(1, 50))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(PrayerSummary::from).collect())
    }
}
