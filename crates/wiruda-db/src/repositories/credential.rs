//! PostgreSQL implementation of CredentialRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use wiruda_core::entities::{Credential, Profile};
use wiruda_core::error::DomainError;
use wiruda_core::traits::{CredentialRepository, RepoResult};

use crate::models::CredentialModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CredentialRepository
#[derive(Clone)]
pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    /// Create a new PgCredentialRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PgCredentialRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Credential>> {
        let result = sqlx::query_as::<_, CredentialModel>(
            r#"
            SELECT user_id, email, password_hash, created_at
            FROM credentials
            WHERE email = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Credential::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM credentials WHERE email = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, credential, profile), fields(user_id = %credential.user_id))]
    async fn create(&self, credential: &Credential, profile: &Profile) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO profiles (id, full_name, phone, join_reason, role, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            "#,
        )
        .bind(profile.id)
        .bind(&profile.full_name)
        .bind(profile.phone.as_deref())
        .bind(profile.join_reason.as_deref())
        .bind(profile.role.as_str())
        .bind(profile.status.as_str())
        .bind(profile.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO credentials (user_id, email, password_hash, created_at)
            VALUES ($1, LOWER($2), $3, $4)
            "#,
        )
        .bind(credential.user_id)
        .bind(&credential.email)
        .bind(&credential.password_hash)
        .bind(credential.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
