//! Session resolver
//!
//! Turns a presented access token into the caller's profile. A missing or
//! invalid session is not an error: it resolves to `None`.

use tracing::{debug, instrument, warn};
use wiruda_core::entities::Profile;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Session resolver service
pub struct SessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionService<'a> {
    /// Create a new SessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the caller's profile from an access token
    #[instrument(skip_all)]
    pub async fn resolve(&self, token: Option<&str>) -> ServiceResult<Option<Profile>> {
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let claims = match self.ctx.jwt_service().verify_access(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(error = %e, "Ignoring invalid session token");
                return Ok(None);
            }
        };
        let user_id = claims.user_id();

        let profile = self.ctx.profile_repo().find_by_id(user_id).await?;
        if profile.is_none() {
            warn!(user_id = %user_id, "Session has no matching profile");
        }
        Ok(profile)
    }
}
