//! Reaction service
//!
//! Append-only reactions on prayers. Repeating a reaction is a no-op that
//! still succeeds.

use tracing::{debug, info, instrument};
use uuid::Uuid;
use wiruda_core::entities::{Profile, Reaction};
use wiruda_core::policy::ensure_can_react;
use wiruda_core::DomainError;

use crate::dto::{ReactionRequest, ReactionResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// React to a prayer and return the updated counts
    #[instrument(skip(self, caller))]
    pub async fn react(
        &self,
        caller: Option<&Profile>,
        prayer_id: Uuid,
        request: ReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        let member = ensure_can_react(caller)?;

        if self.ctx.prayer_repo().find_by_id(prayer_id).await?.is_none() {
            return Err(ServiceError::not_found("Prayer", prayer_id.to_string()));
        }

        let reaction = Reaction::new(prayer_id, member.id, request.reaction_type);
        match self.ctx.reaction_repo().create(&reaction).await {
            Ok(()) => info!(
                prayer_id = %prayer_id,
                member_id = %member.id,
                reaction = %request.reaction_type,
                "Reaction added"
            ),
            Err(DomainError::ReactionAlreadyExists) => debug!(
                prayer_id = %prayer_id,
                member_id = %member.id,
                reaction = %request.reaction_type,
                "Reaction already present"
            ),
            Err(e) => return Err(e.into()),
        }

        let reactions = self
            .ctx
            .reaction_repo()
            .counts_for_prayer(prayer_id)
            .await?;

        Ok(ReactionResponse {
            prayer_id,
            reaction_type: request.reaction_type,
            reactions,
        })
    }
}
