//! Prayer entity - a member-authored prayer request

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::AuthorInfo;
use super::reaction::ReactionCounts;
use crate::error::DomainError;

/// Prayer entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prayer {
    pub id: Uuid,
    pub author_id: Uuid,
    /// Sanitized HTML
    pub content: String,
    pub image_url: Option<String>,
    pub is_answered: bool,
    pub answered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for inserting a prayer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPrayer {
    pub author_id: Uuid,
    pub content: String,
    pub image_url: Option<String>,
}

/// Editable prayer fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerChanges {
    pub content: String,
    pub image_url: Option<String>,
}

/// Prayer with author and reaction counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerDetail {
    pub prayer: Prayer,
    pub author: Option<AuthorInfo>,
    pub reactions: ReactionCounts,
}

/// Prayer list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerSummary {
    pub prayer: Prayer,
    pub author_name: Option<String>,
    pub reactions: ReactionCounts,
}

/// Answered-state filter for prayer lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerStatusFilter {
    #[default]
    All,
    Answered,
    Pending,
}

impl PrayerStatusFilter {
    /// The `is_answered` value to filter on, if any
    pub fn answered(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Answered => Some(true),
            Self::Pending => Some(false),
        }
    }
}

impl FromStr for PrayerStatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "answered" => Ok(Self::Answered),
            "pending" => Ok(Self::Pending),
            other => Err(DomainError::ValidationError(format!(
                "Unknown prayer status: {other}"
            ))),
        }
    }
}

/// Prayer list filter
#[derive(Debug, Clone, Default)]
pub struct PrayerFilter {
    /// Matched against content and author name
    pub search: Option<String>,
    pub status: PrayerStatusFilter,
}
