//! Profile and credential model -> entity mappers

use wiruda_core::entities::{AuthorInfo, Credential, MemberListing, MemberRole, Profile, ProfileStatus};
use uuid::Uuid;

use crate::models::{CredentialModel, MemberListingModel, ProfileModel};

/// Unknown role text maps to the least privileged role
pub fn parse_role(value: &str) -> MemberRole {
    value.parse().unwrap_or_default()
}

/// Unknown status text maps to `pending`
pub fn parse_status(value: &str) -> ProfileStatus {
    value.parse().unwrap_or_default()
}

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: model.id,
            full_name: model.full_name,
            phone: model.phone,
            join_reason: model.join_reason,
            role: parse_role(&model.role),
            status: parse_status(&model.status),
            created_at: model.created_at,
            approved_at: model.approved_at,
            last_login_at: model.last_login_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<MemberListingModel> for MemberListing {
    fn from(model: MemberListingModel) -> Self {
        MemberListing {
            profile: model.profile.into(),
            email: model.email,
        }
    }
}

impl From<CredentialModel> for Credential {
    fn from(model: CredentialModel) -> Self {
        Credential {
            user_id: model.user_id,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}

/// Build author info from LEFT JOIN columns; `None` when the profile row is missing
pub(crate) fn author_from_columns(
    id: Uuid,
    full_name: Option<String>,
    role: Option<&str>,
    status: Option<&str>,
) -> Option<AuthorInfo> {
    full_name.map(|full_name| AuthorInfo {
        id,
        full_name,
        role: role.map(parse_role).unwrap_or_default(),
        status: status.map(parse_status).unwrap_or_default(),
    })
}
