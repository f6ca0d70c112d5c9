//! Prayer service
//!
//! Prayer reads, the prayer lifecycle and the admin answered toggle.

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;
use wiruda_common::sanitize_html;
use wiruda_core::entities::{
    MemberRole, NewPrayer, PrayerChanges, PrayerDetail, Profile, ProfileStatus, ReactionCounts,
};
use wiruda_core::policy::{ensure_can_manage, require_approved_status, require_role};

use crate::dto::{
    AnsweredRequest, CreatedResponse, PageResponse, PrayerListItem, PrayerQuery, PrayerRequest,
    PrayerResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::image::{owned_image_url, ImageCleaner};

/// Prayer service
pub struct PrayerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PrayerService<'a> {
    /// Create a new PrayerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, query))]
    pub async fn list(&self, query: &PrayerQuery) -> ServiceResult<PageResponse<PrayerListItem>> {
        let page = self
            .ctx
            .prayer_repo()
            .list(&query.filter(), query.page_request())
            .await?;
        Ok(page.into())
    }

    #[instrument(skip(self))]
    pub async fn detail(&self, prayer_id: Uuid) -> ServiceResult<PrayerResponse> {
        let detail = self
            .ctx
            .prayer_repo()
            .find_detail(prayer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Prayer", prayer_id.to_string()))?;
        Ok(PrayerResponse::from(detail))
    }

    /// Post a prayer request as the caller. Only approved members may write.
    #[instrument(skip(self, caller, request))]
    pub async fn create(
        &self,
        caller: Option<&Profile>,
        request: PrayerRequest,
    ) -> ServiceResult<CreatedResponse> {
        let author = require_approved_status(caller, &[ProfileStatus::Approved])?;
        request.validate()?;
        let image_url = owned_image_url(self.ctx, request.image_url.as_deref())?;

        let prayer = NewPrayer {
            author_id: author.id,
            content: sanitize_html(&request.content),
            image_url,
        };
        let created = self.ctx.prayer_repo().create(&prayer).await?;

        info!(prayer_id = %created.id, author_id = %author.id, "Prayer posted");
        Ok(CreatedResponse { id: created.id })
    }

    /// Edit a prayer. Owner or admin only.
    #[instrument(skip(self, caller, request))]
    pub async fn update(
        &self,
        caller: Option<&Profile>,
        prayer_id: Uuid,
        request: PrayerRequest,
    ) -> ServiceResult<PrayerResponse> {
        let existing = self
            .ctx
            .prayer_repo()
            .find_by_id(prayer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Prayer", prayer_id.to_string()))?;
        let editor = ensure_can_manage(caller, existing.author_id)?;
        request.validate()?;
        let image_url = owned_image_url(self.ctx, request.image_url.as_deref())?;

        let changes = PrayerChanges {
            content: sanitize_html(&request.content),
            image_url,
        };
        let updated = self.ctx.prayer_repo().update(prayer_id, &changes).await?;

        info!(prayer_id = %prayer_id, editor_id = %editor.id, "Prayer updated");

        ImageCleaner::new(self.ctx)
            .replaced(existing.image_url.as_deref(), changes.image_url.as_deref())
            .await;

        match self.ctx.prayer_repo().find_detail(prayer_id).await {
            Ok(Some(detail)) => Ok(PrayerResponse::from(detail)),
            reload => {
                if let Err(e) = reload {
                    warn!(prayer_id = %prayer_id, error = %e, "Failed to reload updated prayer");
                }
                Ok(PrayerResponse::from(PrayerDetail {
                    prayer: updated,
                    author: None,
                    reactions: ReactionCounts::default(),
                }))
            }
        }
    }

    /// Delete a prayer, then its image. Owner or admin only.
    #[instrument(skip(self, caller))]
    pub async fn delete(&self, caller: Option<&Profile>, prayer_id: Uuid) -> ServiceResult<()> {
        let existing = self
            .ctx
            .prayer_repo()
            .find_by_id(prayer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Prayer", prayer_id.to_string()))?;
        let editor = ensure_can_manage(caller, existing.author_id)?;

        self.ctx.prayer_repo().delete(prayer_id).await?;

        info!(prayer_id = %prayer_id, editor_id = %editor.id, "Prayer deleted");

        if let Some(url) = existing.image_url.as_deref() {
            ImageCleaner::new(self.ctx).remove(url).await;
        }
        Ok(())
    }

    /// Admin: mark a prayer answered or reopen it
    #[instrument(skip(self, caller))]
    pub async fn set_answered(
        &self,
        caller: Option<&Profile>,
        prayer_id: Uuid,
        request: AnsweredRequest,
    ) -> ServiceResult<PrayerResponse> {
        let admin = require_role(caller, MemberRole::Admin)?;

        let answered_at = request.is_answered.then(Utc::now);
        self.ctx
            .prayer_repo()
            .set_answered(prayer_id, request.is_answered, answered_at)
            .await?;

        info!(
            prayer_id = %prayer_id,
            admin_id = %admin.id,
            is_answered = request.is_answered,
            "Prayer answered state changed"
        );
        self.detail(prayer_id).await
    }
}
