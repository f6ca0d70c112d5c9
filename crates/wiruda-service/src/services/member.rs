//! Admin member moderation
//!
//! Member listing plus status and role changes. `approved_at` follows the
//! status: it is stamped on approval and cleared otherwise.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use wiruda_core::entities::{approved_at_for, MemberRole, Profile};
use wiruda_core::policy::require_role;

use crate::dto::{
    MemberQuery, MemberResponse, MemberRoleRequest, MemberStatusRequest, ProfileResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member moderation service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Members, newest first, filtered by name/join reason and status
    #[instrument(skip(self, caller, query))]
    pub async fn list(
        &self,
        caller: Option<&Profile>,
        query: &MemberQuery,
    ) -> ServiceResult<Vec<MemberResponse>> {
        require_role(caller, MemberRole::Admin)?;

        let members = self.ctx.profile_repo().list(&query.filter()).await?;
        Ok(members.into_iter().map(MemberResponse::from).collect())
    }

    #[instrument(skip(self, caller))]
    pub async fn update_status(
        &self,
        caller: Option<&Profile>,
        member_id: Uuid,
        request: MemberStatusRequest,
    ) -> ServiceResult<ProfileResponse> {
        let admin = require_role(caller, MemberRole::Admin)?;

        let approved_at = approved_at_for(request.status, Utc::now());
        self.ctx
            .profile_repo()
            .update_status(member_id, request.status, approved_at)
            .await?;

        info!(
            member_id = %member_id,
            admin_id = %admin.id,
            status = %request.status,
            "Member status changed"
        );
        self.reload(member_id).await
    }

    #[instrument(skip(self, caller))]
    pub async fn update_role(
        &self,
        caller: Option<&Profile>,
        member_id: Uuid,
        request: MemberRoleRequest,
    ) -> ServiceResult<ProfileResponse> {
        let admin = require_role(caller, MemberRole::Admin)?;

        self.ctx
            .profile_repo()
            .update_role(member_id, request.role)
            .await?;

        info!(
            member_id = %member_id,
            admin_id = %admin.id,
            role = %request.role,
            "Member role changed"
        );
        self.reload(member_id).await
    }

    async fn reload(&self, member_id: Uuid) -> ServiceResult<ProfileResponse> {
        self.ctx
            .profile_repo()
            .find_by_id(member_id)
            .await?
            .map(ProfileResponse::from)
            .ok_or_else(|| ServiceError::not_found("Profile", member_id.to_string()))
    }
}
