//! Service context - dependency container for services
//!
//! Holds all repositories, the image storage client and the JWT service.

use std::sync::Arc;

use wiruda_common::auth::JwtService;
use wiruda_core::traits::{
    CredentialRepository, DevotionRepository, ImageStorage, InquiryRepository, PrayerRepository,
    ProfileRepository, ReactionRepository, SettingsRepository, SupporterRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// Image storage is optional: without it, image cleanup is skipped and logged.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    profile_repo: Arc<dyn ProfileRepository>,
    credential_repo: Arc<dyn CredentialRepository>,
    devotion_repo: Arc<dyn DevotionRepository>,
    prayer_repo: Arc<dyn PrayerRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    supporter_repo: Arc<dyn SupporterRepository>,
    inquiry_repo: Arc<dyn InquiryRepository>,
    settings_repo: Arc<dyn SettingsRepository>,

    // Object storage
    image_storage: Option<Arc<dyn ImageStorage>>,
    storage_bucket: String,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    // === Repositories ===

    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    pub fn credential_repo(&self) -> &dyn CredentialRepository {
        self.credential_repo.as_ref()
    }

    pub fn devotion_repo(&self) -> &dyn DevotionRepository {
        self.devotion_repo.as_ref()
    }

    pub fn prayer_repo(&self) -> &dyn PrayerRepository {
        self.prayer_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    pub fn supporter_repo(&self) -> &dyn SupporterRepository {
        self.supporter_repo.as_ref()
    }

    pub fn inquiry_repo(&self) -> &dyn InquiryRepository {
        self.inquiry_repo.as_ref()
    }

    pub fn settings_repo(&self) -> &dyn SettingsRepository {
        self.settings_repo.as_ref()
    }

    // === Object storage ===

    /// Get the image storage client, if configured
    pub fn image_storage(&self) -> Option<&dyn ImageStorage> {
        self.image_storage.as_deref()
    }

    /// Bucket that content images are uploaded to
    pub fn storage_bucket(&self) -> &str {
        &self.storage_bucket
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("image_storage", &self.image_storage.is_some())
            .field("storage_bucket", &self.storage_bucket)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    credential_repo: Option<Arc<dyn CredentialRepository>>,
    devotion_repo: Option<Arc<dyn DevotionRepository>>,
    prayer_repo: Option<Arc<dyn PrayerRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    supporter_repo: Option<Arc<dyn SupporterRepository>>,
    inquiry_repo: Option<Arc<dyn InquiryRepository>>,
    settings_repo: Option<Arc<dyn SettingsRepository>>,
    image_storage: Option<Arc<dyn ImageStorage>>,
    storage_bucket: Option<String>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn credential_repo(mut self, repo: Arc<dyn CredentialRepository>) -> Self {
        self.credential_repo = Some(repo);
        self
    }

    pub fn devotion_repo(mut self, repo: Arc<dyn DevotionRepository>) -> Self {
        self.devotion_repo = Some(repo);
        self
    }

    pub fn prayer_repo(mut self, repo: Arc<dyn PrayerRepository>) -> Self {
        self.prayer_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn supporter_repo(mut self, repo: Arc<dyn SupporterRepository>) -> Self {
        self.supporter_repo = Some(repo);
        self
    }

    pub fn inquiry_repo(mut self, repo: Arc<dyn InquiryRepository>) -> Self {
        self.inquiry_repo = Some(repo);
        self
    }

    pub fn settings_repo(mut self, repo: Arc<dyn SettingsRepository>) -> Self {
        self.settings_repo = Some(repo);
        self
    }

    pub fn image_storage(mut self, storage: Arc<dyn ImageStorage>) -> Self {
        self.image_storage = Some(storage);
        self
    }

    pub fn storage_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.storage_bucket = Some(bucket.into());
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            profile_repo: required(self.profile_repo, "profile_repo")?,
            credential_repo: required(self.credential_repo, "credential_repo")?,
            devotion_repo: required(self.devotion_repo, "devotion_repo")?,
            prayer_repo: required(self.prayer_repo, "prayer_repo")?,
            reaction_repo: required(self.reaction_repo, "reaction_repo")?,
            supporter_repo: required(self.supporter_repo, "supporter_repo")?,
            inquiry_repo: required(self.inquiry_repo, "inquiry_repo")?,
            settings_repo: required(self.settings_repo, "settings_repo")?,
            image_storage: self.image_storage,
            storage_bucket: self
                .storage_bucket
                .unwrap_or_else(|| "content-images".to_string()),
            jwt_service: required(self.jwt_service, "jwt_service")?,
        })
    }
}
