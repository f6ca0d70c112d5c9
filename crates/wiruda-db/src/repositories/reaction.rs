//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wiruda_core::entities::{Reaction, ReactionCounts};
use wiruda_core::error::DomainError;
use wiruda_core::traits::{ReactionRepository, RepoResult};

use crate::models::ReactionCountModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self, reaction), fields(prayer_id = %reaction.prayer_id, kind = %reaction.reaction_type))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO prayer_reactions (prayer_id, member_id, reaction_type, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(reaction.prayer_id)
        .bind(reaction.member_id)
        .bind(reaction.reaction_type.as_str())
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ReactionAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn counts_for_prayer(&self, prayer_id: Uuid) -> RepoResult<ReactionCounts> {
        let result = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT COUNT(*) FILTER (WHERE reaction_type = 'amen') AS amen_count,
                   COUNT(*) FILTER (WHERE reaction_type = 'together') AS together_count
            FROM prayer_reactions
            WHERE prayer_id = $1
            "#,
        )
        .bind(prayer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into())
    }
}
