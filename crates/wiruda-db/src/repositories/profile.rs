//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wiruda_core::entities::{MemberFilter, MemberListing, MemberRole, Profile, ProfileDetails, ProfileStatus};
use wiruda_core::error::DomainError;
use wiruda_core::traits::{ProfileRepository, RepoResult};

use crate::models::{MemberListingModel, ProfileModel};

use super::error::{like_pattern, map_db_error};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r#"
            SELECT id, full_name, phone, join_reason, role, status,
                   created_at, approved_at, last_login_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self, details))]
    async fn update_details(&self, id: Uuid, details: &ProfileDetails) -> RepoResult<Profile> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r#"
            UPDATE profiles
            SET full_name = $2, phone = $3, join_reason = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING id, full_name, phone, join_reason, role, status,
                      created_at, approved_at, last_login_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&details.full_name)
        .bind(details.phone.as_deref())
        .bind(&details.join_reason)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(Profile::from)
            .ok_or(DomainError::ProfileNotFound(id))
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        id: Uuid,
        status: ProfileStatus,
        approved_at: Option<DateTime<Utc>>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET status = $2, approved_at = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .bind(approved_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProfileNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_role(&self, id: Uuid, role: MemberRole) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET role = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProfileNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn touch_last_login(&self, id: Uuid, at: DateTime<Utc>) -> RepoResult<()> {
        sqlx::query("UPDATE profiles SET last_login_at = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &MemberFilter) -> RepoResult<Vec<MemberListing>> {
        let results = sqlx::query_as::<_, MemberListingModel>(
            r#"
            SELECT p.id, p.full_name, p.phone, p.join_reason, p.role, p.status,
                   p.created_at, p.approved_at, p.last_login_at, p.updated_at,
                   c.email
            FROM profiles p
            LEFT JOIN credentials c ON c.user_id = p.id
            WHERE ($1::text IS NULL OR p.full_name ILIKE $1 OR p.join_reason ILIKE $1)
              AND ($2::text IS NULL OR p.status = $2)
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.status.map(ProfileStatus::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MemberListing::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_all(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_by_status(&self, status: ProfileStatus) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_by_role(&self, role: MemberRole) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles WHERE role = $1")
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
