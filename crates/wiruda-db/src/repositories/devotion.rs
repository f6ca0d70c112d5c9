//! PostgreSQL implementation of DevotionRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wiruda_core::entities::{
    Devotion, DevotionActivity, DevotionChanges, DevotionDetail, DevotionExportRow,
    DevotionFilter, DevotionMetricRow, DevotionSummary, NewDevotion,
};
use wiruda_core::error::DomainError;
use wiruda_core::traits::{DevotionRepository, RepoResult};
use wiruda_core::value_objects::{Page, PageRequest};

use crate::models::{
    DevotionActivityModel, DevotionDetailModel, DevotionExportModel, DevotionMetricModel,
    DevotionModel, DevotionSummaryModel,
};

use super::error::{like_pattern, map_db_error};

/// Shared WHERE clause for list, count and export.
///
/// $1 search pattern, $2 published from, $3 published before, $4 has image
macro_rules! devotion_filter {
    () => {
        r#"
        WHERE ($1::text IS NULL OR d.title ILIKE $1 OR d.scripture_ref ILIKE $1)
          AND ($2::timestamptz IS NULL OR d.published_at >= $2)
          AND ($3::timestamptz IS NULL OR d.published_at < $3)
          AND ($4::boolean IS NULL OR (d.image_url IS NOT NULL) = $4)
        "#
    };
}

const DEVOTION_COLUMNS: &str = "id, author_id, title, scripture_ref, scripture_text, body, \
                                image_url, views, published_at, updated_at";

/// Bind values for `devotion_filter!`
struct FilterArgs {
    pattern: Option<String>,
    from: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
    has_image: Option<bool>,
}

impl From<&DevotionFilter> for FilterArgs {
    fn from(filter: &DevotionFilter) -> Self {
        Self {
            pattern: like_pattern(filter.search.as_deref()),
            from: filter.published.start_at(),
            before: filter.published.end_before(),
            has_image: filter.has_image.has_image(),
        }
    }
}

/// PostgreSQL implementation of DevotionRepository
#[derive(Clone)]
pub struct PgDevotionRepository {
    pool: PgPool,
}

impl PgDevotionRepository {
    /// Create a new PgDevotionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DevotionRepository for PgDevotionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Devotion>> {
        let result = sqlx::query_as::<_, DevotionModel>(&format!(
            "SELECT {DEVOTION_COLUMNS} FROM devotions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Devotion::from))
    }

    #[instrument(skip(self))]
    async fn find_detail(&self, id: Uuid) -> RepoResult<Option<DevotionDetail>> {
        let result = sqlx::query_as::<_, DevotionDetailModel>(
            r#"
            SELECT d.id, d.author_id, d.title, d.scripture_ref, d.scripture_text, d.body,
                   d.image_url, d.views, d.published_at, d.updated_at,
                   p.full_name AS author_full_name, p.role AS author_role, p.status AS author_status
            FROM devotions d
            LEFT JOIN profiles p ON p.id = d.author_id
            WHERE d.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DevotionDetail::from))
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: &DevotionFilter,
        page: PageRequest,
    ) -> RepoResult<Page<DevotionSummary>> {
        let args = FilterArgs::from(filter);

        let total = sqlx::query_scalar::<_, i64>(concat!(
            "SELECT COUNT(*) FROM devotions d ",
            devotion_filter!()
        ))
        .bind(args.pattern.as_deref())
        .bind(args.from)
        .bind(args.before)
        .bind(args.has_image)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, DevotionSummaryModel>(concat!(
            r#"
            SELECT d.id, d.title, d.scripture_ref, d.body, d.image_url, d.views, d.published_at,
                   p.full_name AS author_name
            FROM devotions d
            LEFT JOIN profiles p ON p.id = d.author_id
            "#,
            devotion_filter!(),
            r#"
            ORDER BY d.published_at DESC
            LIMIT $5 OFFSET $6
            "#
        ))
        .bind(args.pattern.as_deref())
        .bind(args.from)
        .bind(args.before)
        .bind(args.has_image)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(DevotionSummary::from).collect(),
            total,
            page,
        ))
    }

    #[instrument(skip(self))]
    async fn list_for_export(&self, filter: &DevotionFilter) -> RepoResult<Vec<DevotionExportRow>> {
        let args = FilterArgs::from(filter);

        let rows = sqlx::query_as::<_, DevotionExportModel>(concat!(
            r#"
            SELECT d.id, d.title, d.scripture_ref, d.published_at, d.views,
                   (d.image_url IS NOT NULL) AS has_image,
                   p.full_name AS author_name
            FROM devotions d
            LEFT JOIN profiles p ON p.id = d.author_id
            "#,
            devotion_filter!(),
            "ORDER BY d.published_at DESC"
        ))
        .bind(args.pattern.as_deref())
        .bind(args.from)
        .bind(args.before)
        .bind(args.has_image)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(DevotionExportRow::from).collect())
    }

    #[instrument(skip(self, devotion), fields(author_id = %devotion.author_id))]
    async fn create(&self, devotion: &NewDevotion) -> RepoResult<Devotion> {
        let result = sqlx::query_as::<_, DevotionModel>(&format!(
            r#"
            INSERT INTO devotions (id, author_id, title, scripture_ref, scripture_text, body, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {DEVOTION_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(devotion.author_id)
        .bind(&devotion.title)
        .bind(&devotion.scripture_ref)
        .bind(devotion.scripture_text.as_deref())
        .bind(&devotion.body)
        .bind(devotion.image_url.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into())
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: Uuid, changes: &DevotionChanges) -> RepoResult<Devotion> {
        // author_id never changes after creation
        let result = sqlx::query_as::<_, DevotionModel>(&format!(
            r#"
            UPDATE devotions
            SET title = $2, scripture_ref = $3, scripture_text = $4, body = $5,
                image_url = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING {DEVOTION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.scripture_ref)
        .bind(changes.scripture_text.as_deref())
        .bind(&changes.body)
        .bind(changes.image_url.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(Devotion::from)
            .ok_or(DomainError::DevotionNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM devotions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DevotionNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_view(&self, devotion_id: Uuid, viewer_id: Uuid) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO devotion_views (devotion_id, viewer_id)
            VALUES ($1, $2)
            ON CONFLICT (devotion_id, viewer_id) DO NOTHING
            "#,
        )
        .bind(devotion_id)
        .bind(viewer_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected()
            > 0;

        if inserted {
            sqlx::query("UPDATE devotions SET views = views + 1 WHERE id = $1")
                .bind(devotion_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn count_all(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM devotions")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_since(&self, since: DateTime<Utc>) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM devotions WHERE published_at >= $1")
            .bind(since)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_with_image(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM devotions WHERE image_url IS NOT NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn metric_rows(&self) -> RepoResult<Vec<DevotionMetricRow>> {
        let rows = sqlx::query_as::<_, DevotionMetricModel>(
            "SELECT id, title, views, published_at, author_id FROM devotions",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(DevotionMetricRow::from).collect())
    }

    #[instrument(skip(self))]
    async fn activity_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<DevotionActivity>> {
        let rows = sqlx::query_as::<_, DevotionActivityModel>(
            r#"
            SELECT published_at, views
            FROM devotions
            WHERE published_at >= $1
            ORDER BY published_at DESC
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(DevotionActivity::from).collect())
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: i64) -> RepoResult<Vec<DevotionSummary>> {
        let rows = sqlx::query_as::<_, DevotionSummaryModel>(
            r#"
            SELECT d.id, d.title, d.scripture_ref, d.body, d.image_url, d.views, d.published_at,
                   p.full_name AS author_name
            FROM devotions d
            LEFT JOIN profiles p ON p.id = d.author_id
            ORDER BY d.published_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit.clamp(1, 50))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(DevotionSummary::from).collect())
    }
}
