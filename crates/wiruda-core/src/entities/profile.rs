//! Member profile entity - the application-level identity of a member

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Member role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    #[default]
    Member,
    Admin,
}

impl MemberRole {
    pub const ALL: [MemberRole; 2] = [MemberRole::Member, MemberRole::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(Self::Member),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::ValidationError(format!("Unknown role: {other}"))),
        }
    }
}

/// Approval status of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Blocked,
}

impl ProfileStatus {
    pub const ALL: [ProfileStatus; 4] = [
        ProfileStatus::Pending,
        ProfileStatus::Approved,
        ProfileStatus::Rejected,
        ProfileStatus::Blocked,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "blocked" => Ok(Self::Blocked),
            other => Err(DomainError::ValidationError(format!("Unknown status: {other}"))),
        }
    }
}

/// Member profile entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub phone: Option<String>,
    pub join_reason: Option<String>,
    pub role: MemberRole,
    pub status: ProfileStatus,
    pub created_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a freshly registered profile (pending member)
    pub fn new(
        id: Uuid,
        full_name: String,
        phone: Option<String>,
        join_reason: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            full_name,
            phone,
            join_reason,
            role: MemberRole::Member,
            status: ProfileStatus::Pending,
            created_at: now,
            approved_at: None,
            last_login_at: None,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == MemberRole::Admin
    }

    #[inline]
    pub fn is_approved(&self) -> bool {
        self.status == ProfileStatus::Approved
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.status == ProfileStatus::Blocked
    }

    /// Apply an admin status decision.
    ///
    /// `approved_at` is set iff the new status is `approved`.
    pub fn apply_status(&mut self, status: ProfileStatus, now: DateTime<Utc>) {
        self.status = status;
        self.approved_at = approved_at_for(status, now);
        self.updated_at = now;
    }
}

/// The `approved_at` value that accompanies a status change
pub fn approved_at_for(status: ProfileStatus, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    (status == ProfileStatus::Approved).then_some(now)
}

/// Member-editable profile fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetails {
    pub full_name: String,
    pub phone: Option<String>,
    pub join_reason: String,
}

/// Post author as shown next to content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
    pub id: Uuid,
    pub full_name: String,
    pub role: MemberRole,
    pub status: ProfileStatus,
}

/// Admin member list filter
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub search: Option<String>,
    pub status: Option<ProfileStatus>,
}

/// Profile joined with its login email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberListing {
    pub profile: Profile,
    pub email: Option<String>,
}
