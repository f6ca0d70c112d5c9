//! Member self-service: read and edit one's own profile

use tracing::{info, instrument};
use validator::Validate;
use wiruda_core::entities::{Profile, ProfileDetails};
use wiruda_core::policy::Denial;

use crate::dto::requests::non_blank;
use crate::dto::{ProfileResponse, UpdateAccountRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The caller's own profile
    pub fn get(&self, caller: Option<&Profile>) -> ServiceResult<ProfileResponse> {
        let profile = caller.ok_or(Denial::Unauthenticated)?;
        Ok(ProfileResponse::from(profile))
    }

    /// Update name, phone and join reason. Role and status are admin-only.
    #[instrument(skip(self, caller, request))]
    pub async fn update(
        &self,
        caller: Option<&Profile>,
        request: UpdateAccountRequest,
    ) -> ServiceResult<ProfileResponse> {
        let profile = caller.ok_or(Denial::Unauthenticated)?;
        request.validate()?;

        let details = ProfileDetails {
            full_name: request.full_name.trim().to_string(),
            phone: non_blank(request.phone.as_deref()),
            join_reason: request.join_reason.trim().to_string(),
        };
        let updated = self
            .ctx
            .profile_repo()
            .update_details(profile.id, &details)
            .await?;

        info!(user_id = %profile.id, "Profile updated");
        Ok(ProfileResponse::from(updated))
    }
}
