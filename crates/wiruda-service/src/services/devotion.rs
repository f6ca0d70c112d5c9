//! Devotion service
//!
//! Devotion reads plus the create/update/delete lifecycle. Image objects are
//! cleaned up only after the row change has been committed.

use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;
use wiruda_common::sanitize_html;
use wiruda_core::entities::{
    DevotionChanges, DevotionDetail, NewDevotion, Profile, ProfileStatus,
};
use wiruda_core::policy::{ensure_can_manage, require_approved_status};

use crate::dto::{
    CreatedResponse, DevotionListItem, DevotionQuery, DevotionRequest, DevotionResponse,
    PageResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::image::{owned_image_url, ImageCleaner};

/// Devotion service
pub struct DevotionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DevotionService<'a> {
    /// Create a new DevotionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Filtered, paged devotion list
    #[instrument(skip(self, query))]
    pub async fn list(
        &self,
        query: &DevotionQuery,
    ) -> ServiceResult<PageResponse<DevotionListItem>> {
        let filter = query.filter()?;
        let page = self
            .ctx
            .devotion_repo()
            .list(&filter, query.page_request())
            .await?;
        Ok(page.into())
    }

    /// Devotion detail. An authenticated viewer's first visit is counted.
    #[instrument(skip(self, viewer))]
    pub async fn detail(
        &self,
        viewer: Option<&Profile>,
        devotion_id: Uuid,
    ) -> ServiceResult<DevotionResponse> {
        let mut detail = self
            .ctx
            .devotion_repo()
            .find_detail(devotion_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Devotion", devotion_id.to_string()))?;

        if let Some(viewer) = viewer {
            match self
                .ctx
                .devotion_repo()
                .record_view(devotion_id, viewer.id)
                .await
            {
                Ok(true) => detail.devotion.views += 1,
                Ok(false) => {}
                Err(e) => warn!(
                    devotion_id = %devotion_id,
                    viewer_id = %viewer.id,
                    error = %e,
                    "Failed to record devotion view"
                ),
            }
        }

        Ok(DevotionResponse::from(detail))
    }

    /// Publish a devotion as the caller. Only approved members may write.
    #[instrument(skip(self, caller, request))]
    pub async fn create(
        &self,
        caller: Option<&Profile>,
        request: DevotionRequest,
    ) -> ServiceResult<CreatedResponse> {
        let author = require_approved_status(caller, &[ProfileStatus::Approved])?;
        request.validate()?;
        let image_url = owned_image_url(self.ctx, request.image_url.as_deref())?;

        let devotion = NewDevotion {
            author_id: author.id,
            title: request.title.trim().to_string(),
            scripture_ref: request.scripture_ref.trim().to_string(),
            scripture_text: Some(sanitize_html(&request.scripture_text)),
            body: sanitize_html(&request.body),
            image_url,
        };
        let created = self.ctx.devotion_repo().create(&devotion).await?;

        info!(devotion_id = %created.id, author_id = %author.id, "Devotion published");
        Ok(CreatedResponse { id: created.id })
    }

    /// Edit a devotion. Owner or admin only.
    #[instrument(skip(self, caller, request))]
    pub async fn update(
        &self,
        caller: Option<&Profile>,
        devotion_id: Uuid,
        request: DevotionRequest,
    ) -> ServiceResult<DevotionResponse> {
        let existing = self
            .ctx
            .devotion_repo()
            .find_by_id(devotion_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Devotion", devotion_id.to_string()))?;
        let editor = ensure_can_manage(caller, existing.author_id)?;
        request.validate()?;
        let image_url = owned_image_url(self.ctx, request.image_url.as_deref())?;

        let changes = DevotionChanges {
            title: request.title.trim().to_string(),
            scripture_ref: request.scripture_ref.trim().to_string(),
            scripture_text: Some(sanitize_html(&request.scripture_text)),
            body: sanitize_html(&request.body),
            image_url,
        };
        let updated = self
            .ctx
            .devotion_repo()
            .update(devotion_id, &changes)
            .await?;

        info!(devotion_id = %devotion_id, editor_id = %editor.id, "Devotion updated");

        ImageCleaner::new(self.ctx)
            .replaced(existing.image_url.as_deref(), changes.image_url.as_deref())
            .await;

        // The change is committed; a failed reload only loses the author block
        let detail = match self.ctx.devotion_repo().find_detail(devotion_id).await {
            Ok(Some(detail)) => detail,
            Ok(None) => DevotionDetail {
                devotion: updated,
                author: None,
            },
            Err(e) => {
                warn!(devotion_id = %devotion_id, error = %e, "Failed to reload updated devotion");
                DevotionDetail {
                    devotion: updated,
                    author: None,
                }
            }
        };
        Ok(DevotionResponse::from(detail))
    }

    /// Delete a devotion, then its image. Owner or admin only.
    #[instrument(skip(self, caller))]
    pub async fn delete(&self, caller: Option<&Profile>, devotion_id: Uuid) -> ServiceResult<()> {
        let existing = self
            .ctx
            .devotion_repo()
            .find_by_id(devotion_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Devotion", devotion_id.to_string()))?;
        let editor = ensure_can_manage(caller, existing.author_id)?;

        self.ctx.devotion_repo().delete(devotion_id).await?;

        info!(devotion_id = %devotion_id, editor_id = %editor.id, "Devotion deleted");

        if let Some(url) = existing.image_url.as_deref() {
            ImageCleaner::new(self.ctx).remove(url).await;
        }
        Ok(())
    }
}
