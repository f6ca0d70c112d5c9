//! Supporter records (admin only)

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;
use wiruda_core::entities::{MemberRole, Profile, SupporterDraft};
use wiruda_core::policy::require_role;
use wiruda_core::value_objects::parse_day;

use crate::dto::requests::non_blank;
use crate::dto::{SupporterQuery, SupporterRequest, SupporterResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct SupporterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SupporterService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, caller, query))]
    pub async fn list(
        &self,
        caller: Option<&Profile>,
        query: &SupporterQuery,
    ) -> ServiceResult<Vec<SupporterResponse>> {
        require_role(caller, MemberRole::Admin)?;
        let filter = query.filter()?;

        let rows = self.ctx.supporter_repo().list(&filter).await?;
        Ok(rows.into_iter().map(SupporterResponse::from).collect())
    }

    /// Insert a record, or update the one named by `id`
    #[instrument(skip(self, caller, request), fields(id = ?request.id))]
    pub async fn upsert(
        &self,
        caller: Option<&Profile>,
        request: SupporterRequest,
    ) -> ServiceResult<SupporterResponse> {
        let admin = require_role(caller, MemberRole::Admin)?;
        request.validate()?;

        let supported_on = parse_day(Some(&request.supported_on))?
            .ok_or_else(|| ServiceError::validation("supported_on is required"))?;
        let draft = SupporterDraft {
            id: request.id,
            name: request.name.trim().to_string(),
            amount: request.amount,
            supported_on,
            memo: non_blank(request.memo.as_deref()),
        };
        let saved = self.ctx.supporter_repo().upsert(&draft).await?;

        info!(supporter_id = %saved.id, admin_id = %admin.id, "Supporter saved");
        Ok(SupporterResponse::from(saved))
    }

    #[instrument(skip(self, caller))]
    pub async fn delete(&self, caller: Option<&Profile>, supporter_id: Uuid) -> ServiceResult<()> {
        let admin = require_role(caller, MemberRole::Admin)?;

        self.ctx.supporter_repo().delete(supporter_id).await?;

        info!(supporter_id = %supporter_id, admin_id = %admin.id, "Supporter deleted");
        Ok(())
    }
}
