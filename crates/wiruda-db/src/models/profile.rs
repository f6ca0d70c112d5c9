//! Profile and credential database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: Uuid,
    pub full_name: String,
    pub phone: Option<String>,
    pub join_reason: Option<String>,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// Profile joined with its login email
#[derive(Debug, Clone, FromRow)]
pub struct MemberListingModel {
    #[sqlx(flatten)]
    pub profile: ProfileModel,
    pub email: Option<String>,
}

/// Database model for credentials table
#[derive(Debug, Clone, FromRow)]
pub struct CredentialModel {
    pub user_id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
