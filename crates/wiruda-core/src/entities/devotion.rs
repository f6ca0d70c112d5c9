//! Devotion entity - a member-authored devotional post

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::AuthorInfo;
use crate::error::DomainError;
use crate::value_objects::DateRange;

/// Devotion entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Devotion {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub scripture_ref: String,
    pub scripture_text: Option<String>,
    /// Sanitized HTML
    pub body: String,
    pub image_url: Option<String>,
    pub views: i64,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Devotion {
    #[inline]
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

/// Values for inserting a devotion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevotion {
    pub author_id: Uuid,
    pub title: String,
    pub scripture_ref: String,
    pub scripture_text: Option<String>,
    pub body: String,
    pub image_url: Option<String>,
}

/// Editable devotion fields. The author is never part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevotionChanges {
    pub title: String,
    pub scripture_ref: String,
    pub scripture_text: Option<String>,
    pub body: String,
    pub image_url: Option<String>,
}

/// Devotion with its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevotionDetail {
    pub devotion: Devotion,
    pub author: Option<AuthorInfo>,
}

/// Devotion list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevotionSummary {
    pub id: Uuid,
    pub title: String,
    pub scripture_ref: String,
    pub body: String,
    pub image_url: Option<String>,
    pub views: i64,
    pub published_at: DateTime<Utc>,
    pub author_name: Option<String>,
}

/// Devotion CSV export row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevotionExportRow {
    pub id: Uuid,
    pub title: String,
    pub scripture_ref: String,
    pub published_at: DateTime<Utc>,
    pub author_name: Option<String>,
    pub views: i64,
    pub has_image: bool,
}

/// Per-devotion figures used by the admin metrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevotionMetricRow {
    pub id: Uuid,
    pub title: String,
    pub views: i64,
    pub published_at: DateTime<Utc>,
    pub author_id: Uuid,
}

/// Publication timestamp and views, input to monthly bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevotionActivity {
    pub published_at: DateTime<Utc>,
    pub views: i64,
}

/// Image presence filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFilter {
    #[default]
    All,
    With,
    Without,
}

impl ImageFilter {
    /// The image presence to filter on, if any
    pub fn has_image(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::With => Some(true),
            Self::Without => Some(false),
        }
    }
}

impl FromStr for ImageFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "with" => Ok(Self::With),
            "without" => Ok(Self::Without),
            other => Err(DomainError::ValidationError(format!(
                "Unknown image filter: {other}"
            ))),
        }
    }
}

/// Devotion list/export filter
#[derive(Debug, Clone, Default)]
pub struct DevotionFilter {
    /// Matched against title and scripture reference
    pub search: Option<String>,
    /// Applied to `published_at`, both ends inclusive
    pub published: DateRange,
    pub has_image: ImageFilter,
}
