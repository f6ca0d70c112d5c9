//! Post images
//!
//! Incoming image URLs must point into the configured bucket. Cleanup runs
//! after a committed row mutation; its failures are logged and swallowed,
//! the row change is never rolled back because an object survived.

use tracing::{debug, info, warn};
use validator::{ValidationError, ValidationErrors};
use wiruda_common::StorageObject;
use wiruda_core::DomainError;

use crate::dto::requests::non_blank;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Image URL to store on a post. Blank means no image; anything else must
/// name an object in the configured bucket.
pub fn owned_image_url(
    ctx: &ServiceContext,
    value: Option<&str>,
) -> ServiceResult<Option<String>> {
    let Some(url) = non_blank(value) else {
        return Ok(None);
    };

    match StorageObject::from_public_url(&url) {
        Some(object) if object.bucket == ctx.storage_bucket() => Ok(Some(url)),
        _ => {
            debug!(url = %url, "Rejecting image outside the storage bucket");
            let rejected = DomainError::InvalidImageUrl;
            let mut errors = ValidationErrors::new();
            errors.add(
                "image_url",
                ValidationError::new(rejected.code()).with_message(rejected.to_string().into()),
            );
            Err(ServiceError::InvalidFields(errors))
        }
    }
}

/// Removes image objects no longer referenced by a post
pub struct ImageCleaner<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImageCleaner<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Remove `previous` when a post's image changed from it to `next`
    pub async fn replaced(&self, previous: Option<&str>, next: Option<&str>) {
        match previous {
            Some(prev) if Some(prev) != next => self.remove(prev).await,
            _ => {}
        }
    }

    /// Best-effort removal of the object behind a public URL
    pub async fn remove(&self, public_url: &str) {
        let Some(object) = StorageObject::from_public_url(public_url) else {
            debug!(url = %public_url, "Image URL is not a storage object, skipping removal");
            return;
        };

        if object.bucket != self.ctx.storage_bucket() {
            info!(
                bucket = %object.bucket,
                expected = %self.ctx.storage_bucket(),
                "Image belongs to a foreign bucket, skipping removal"
            );
            return;
        }

        let Some(storage) = self.ctx.image_storage() else {
            warn!(path = %object.path, "Image storage not configured, object left in place");
            return;
        };

        if let Err(e) = storage.remove(&object.bucket, &object.path).await {
            warn!(error = %e, bucket = %object.bucket, path = %object.path, "Image removal failed");
        } else {
            debug!(bucket = %object.bucket, path = %object.path, "Image removed");
        }
    }
}
