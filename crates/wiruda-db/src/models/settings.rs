//! Site settings database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for site_settings table
#[derive(Debug, Clone, FromRow)]
pub struct SiteSettingsModel {
    pub id: Uuid,
    pub verse_ref: String,
    pub verse_text: String,
    pub main_prayer: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
