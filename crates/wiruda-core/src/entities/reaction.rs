//! Reaction entity - a member's acknowledgment on a prayer

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Reaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Amen,
    Together,
}

impl ReactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Amen => "amen",
            Self::Together => "together",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "amen" => Ok(Self::Amen),
            "together" => Ok(Self::Together),
            other => Err(DomainError::ValidationError(format!(
                "Unknown reaction type: {other}"
            ))),
        }
    }
}

/// Reaction entity. Unique per (prayer, member, type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub prayer_id: Uuid,
    pub member_id: Uuid,
    pub reaction_type: ReactionType,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(prayer_id: Uuid, member_id: Uuid, reaction_type: ReactionType) -> Self {
        Self {
            prayer_id,
            member_id,
            reaction_type,
            created_at: Utc::now(),
        }
    }
}

/// Aggregated reaction counts for a prayer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReactionCounts {
    pub amen: i64,
    pub together: i64,
}

impl ReactionCounts {
    /// Build counts from grouped (type, count) rows
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (ReactionType, i64)>,
    {
        pairs
            .into_iter()
            .fold(Self::default(), |mut acc, (kind, count)| {
                acc.add(kind, count);
                acc
            })
    }

    pub fn add(&mut self, kind: ReactionType, count: i64) {
        match kind {
            ReactionType::Amen => self.amen += count,
            ReactionType::Together => self.together += count,
        }
    }

    pub fn get(&self, kind: ReactionType) -> i64 {
        match kind {
            ReactionType::Amen => self.amen,
            ReactionType::Together => self.together,
        }
    }
}
