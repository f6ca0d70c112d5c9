//! PostgreSQL implementation of SettingsRepository
//!
//! The table holds at most one meaningful row: the oldest one wins.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wiruda_core::entities::{SettingsChanges, SiteSettings};
use wiruda_core::traits::{RepoResult, SettingsRepository};

use crate::models::SiteSettingsModel;

use super::error::map_db_error;

const SETTINGS_COLUMNS: &str = "id, verse_ref, verse_text, main_prayer, contact_email, \
                                contact_phone, contact_note, created_at, updated_at";

/// PostgreSQL implementation of SettingsRepository
#[derive(Clone)]
pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    /// Create a new PgSettingsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    #[instrument(skip(self))]
    async fn current(&self) -> RepoResult<Option<SiteSettings>> {
        let result = sqlx::query_as::<_, SiteSettingsModel>(&format!(
            "SELECT {SETTINGS_COLUMNS} FROM site_settings ORDER BY created_at ASC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SiteSettings::from))
    }

    #[instrument(skip(self, changes))]
    async fn save(&self, changes: &SettingsChanges) -> RepoResult<SiteSettings> {
        let existing = self.current().await?.map(|s| s.id);

        let sql = if existing.is_some() {
            format!(
                r#"
                UPDATE site_settings
                SET verse_ref = $2, verse_text = $3, main_prayer = $4,
                    contact_email = $5, contact_phone = $6, contact_note = $7,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING {SETTINGS_COLUMNS}
                "#
            )
        } else {
            format!(
                r#"
                INSERT INTO site_settings
                    (id, verse_ref, verse_text, main_prayer, contact_email, contact_phone, contact_note)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING {SETTINGS_COLUMNS}
                "#
            )
        };

        let result = sqlx::query_as::<_, SiteSettingsModel>(&sql)
            .bind(existing.unwrap_or_else(Uuid::new_v4))
            .bind(&changes.verse_ref)
            .bind(&changes.verse_text)
            .bind(&changes.main_prayer)
            .bind(&changes.contact_email)
            .bind(&changes.contact_phone)
            .bind(&changes.contact_note)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.into())
    }
}
