//! Login credential - the auth side of a member identity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Email/password credential; `user_id` is shared with the member profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub user_id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(user_id: Uuid, email: String, password_hash: String) -> Self {
        Self {
            user_id,
            email: email.to_lowercase(),
            password_hash,
            created_at: Utc::now(),
        }
    }
}
