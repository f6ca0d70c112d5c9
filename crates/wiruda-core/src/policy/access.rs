use uuid::Uuid;

use crate::entities::{MemberRole, Profile, ProfileStatus};
use crate::error::DomainError;

/// Why a policy check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// No resolved profile
    Unauthenticated,
    /// Profile present but not allowed
    Forbidden,
}

impl From<Denial> for DomainError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::Unauthenticated => DomainError::LoginRequired,
            Denial::Forbidden => DomainError::Forbidden,
        }
    }
}

#[inline]
pub fn is_approved(status: ProfileStatus) -> bool {
    status == ProfileStatus::Approved
}

#[inline]
pub fn is_admin(role: MemberRole) -> bool {
    role == MemberRole::Admin
}

/// Owner or admin
pub fn can_manage(profile: Option<&Profile>, owner_id: Uuid) -> bool {
    profile.is_some_and(|p| p.id == owner_id || is_admin(p.role))
}

/// Any present, non-blocked profile may react
pub fn can_react(profile: Option<&Profile>) -> bool {
    profile.is_some_and(|p| p.status != ProfileStatus::Blocked)
}

pub fn require_role(profile: Option<&Profile>, role: MemberRole) -> Result<&Profile, Denial> {
    let profile = profile.ok_or(Denial::Unauthenticated)?;
    if profile.role == role {
        Ok(profile)
    } else {
        Err(Denial::Forbidden)
    }
}

pub fn require_approved_status<'a>(
    profile: Option<&'a Profile>,
    allowed: &[ProfileStatus],
) -> Result<&'a Profile, Denial> {
    let profile = profile.ok_or(Denial::Unauthenticated)?;
    if allowed.contains(&profile.status) {
        Ok(profile)
    } else {
        Err(Denial::Forbidden)
    }
}

pub fn ensure_can_manage(profile: Option<&Profile>, owner_id: Uuid) -> Result<&Profile, Denial> {
    let caller = profile.ok_or(Denial::Unauthenticated)?;
    if can_manage(Some(caller), owner_id) {
        Ok(caller)
    } else {
        Err(Denial::Forbidden)
    }
}

pub fn ensure_can_react(profile: Option<&Profile>) -> Result<&Profile, Denial> {
    let caller = profile.ok_or(Denial::Unauthenticated)?;
    if can_react(Some(caller)) {
        Ok(caller)
    } else {
        Err(Denial::Forbidden)
    }
}
