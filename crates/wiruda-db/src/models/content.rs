//! Devotion, prayer and reaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for devotions table
#[derive(Debug, Clone, FromRow)]
pub struct DevotionModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub scripture_ref: String,
    pub scripture_text: Option<String>,
    pub body: String,
    pub image_url: Option<String>,
    pub views: i64,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Devotion with author columns from a LEFT JOIN on profiles
#[derive(Debug, Clone, FromRow)]
pub struct DevotionDetailModel {
    #[sqlx(flatten)]
    pub devotion: DevotionModel,
    pub author_full_name: Option<String>,
    pub author_role: Option<String>,
    pub author_status: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct DevotionSummaryModel {
    pub id: Uuid,
    pub title: String,
    pub scripture_ref: String,
    pub body: String,
    pub image_url: Option<String>,
    pub views: i64,
    pub published_at: DateTime<Utc>,
    pub author_name: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct DevotionExportModel {
    pub id: Uuid,
    pub title: String,
    pub scripture_ref: String,
    pub published_at: DateTime<Utc>,
    pub author_name: Option<String>,
    pub views: i64,
    pub has_image: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct DevotionMetricModel {
    pub id: Uuid,
    pub title: String,
    pub views: i64,
    pub published_at: DateTime<Utc>,
    pub author_id: Uuid,
}

#[derive(Debug, Clone, FromRow)]
pub struct DevotionActivityModel {
    pub published_at: DateTime<Utc>,
    pub views: i64,
}

/// Database model for prayers table
#[derive(Debug, Clone, FromRow)]
pub struct PrayerModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub image_url: Option<String>,
    pub is_answered: bool,
    pub answered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Prayer with author columns and reaction counts
#[derive(Debug, Clone, FromRow)]
pub struct PrayerRowModel {
    #[sqlx(flatten)]
    pub prayer: PrayerModel,
    pub author_full_name: Option<String>,
    pub author_role: Option<String>,
    pub author_status: Option<String>,
    pub amen_count: i64,
    pub together_count: i64,
}

/// Reaction counts for one prayer
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ReactionCountModel {
    pub amen_count: i64,
    pub together_count: i64,
}
