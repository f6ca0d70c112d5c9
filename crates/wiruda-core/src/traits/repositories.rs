//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::entities::{
    Credential, Devotion, DevotionActivity, DevotionChanges, DevotionDetail, DevotionExportRow,
    DevotionFilter, DevotionMetricRow, DevotionSummary, Inquiry, InquiryStatus, MemberFilter,
    MemberListing, MemberRole, NewDevotion, NewInquiry, NewPrayer, Prayer, PrayerChanges,
    PrayerDetail, PrayerFilter, PrayerSummary, Profile, ProfileDetails, ProfileStatus, Reaction,
    ReactionCounts, SettingsChanges, SiteSettings, Supporter, SupporterDraft, SupporterFilter,
    SupporterTotals,
};
use crate::error::DomainError;
use crate::value_objects::{Page, PageRequest};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by identity ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>>;

    /// Update self-editable fields
    async fn update_details(&self, id: Uuid, details: &ProfileDetails) -> RepoResult<Profile>;

    /// Set approval status and the matching `approved_at`
    async fn update_status(
        &self,
        id: Uuid,
        status: ProfileStatus,
        approved_at: Option<DateTime<Utc>>,
    ) -> RepoResult<()>;

    async fn update_role(&self, id: Uuid, role: MemberRole) -> RepoResult<()>;

    /// Record a successful login
    async fn touch_last_login(&self, id: Uuid, at: DateTime<Utc>) -> RepoResult<()>;

    /// Admin member list, newest first
    async fn list(&self, filter: &MemberFilter) -> RepoResult<Vec<MemberListing>>;

    async fn count_all(&self) -> RepoResult<i64>;

    async fn count_by_status(&self, status: ProfileStatus) -> RepoResult<i64>;

    async fn count_by_role(&self, role: MemberRole) -> RepoResult<i64>;
}

// ============================================================================
// Credential Repository
// ============================================================================

#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Find credential by (lowercased) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Credential>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create the credential and its pending profile together
    async fn create(&self, credential: &Credential, profile: &Profile) -> RepoResult<()>;
}

// ============================================================================
// Devotion Repository
// ============================================================================

#[async_trait]
pub trait DevotionRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Devotion>>;

    /// Devotion joined with its author
    async fn find_detail(&self, id: Uuid) -> RepoResult<Option<DevotionDetail>>;

    /// Filtered page, newest `published_at` first
    async fn list(
        &self,
        filter: &DevotionFilter,
        page: PageRequest,
    ) -> RepoResult<Page<DevotionSummary>>;

    /// All rows matching the filter, newest first
    async fn list_for_export(&self, filter: &DevotionFilter) -> RepoResult<Vec<DevotionExportRow>>;

    async fn create(&self, devotion: &NewDevotion) -> RepoResult<Devotion>;

    async fn update(&self, id: Uuid, changes: &DevotionChanges) -> RepoResult<Devotion>;

    /// Hard delete. Fails with `DevotionNotFound` when no row was removed.
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Record a member's view. Returns true when this was the member's first view.
    async fn record_view(&self, devotion_id: Uuid, viewer_id: Uuid) -> RepoResult<bool>;

    async fn count_all(&self) -> RepoResult<i64>;

    async fn count_since(&self, since: DateTime<Utc>) -> RepoResult<i64>;

    async fn count_with_image(&self) -> RepoResult<i64>;

    /// Per-devotion view figures for metrics
    async fn metric_rows(&self) -> RepoResult<Vec<DevotionMetricRow>>;

    /// Publication activity since the given instant
    async fn activity_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<DevotionActivity>>;

    async fn recent(&self, limit: i64) -> RepoResult<Vec<DevotionSummary>>;
}

// ============================================================================
// Prayer Repository
// ============================================================================

#[async_trait]
pub trait PrayerRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Prayer>>;

    /// Prayer joined with author and reaction counts
    async fn find_detail(&self, id: Uuid) -> RepoResult<Option<PrayerDetail>>;

    /// Filtered page, newest first
    async fn list(&self, filter: &PrayerFilter, page: PageRequest)
        -> RepoResult<Page<PrayerSummary>>;

    async fn create(&self, prayer: &NewPrayer) -> RepoResult<Prayer>;

    async fn update(&self, id: Uuid, changes: &PrayerChanges) -> RepoResult<Prayer>;

    /// Hard delete. Fails with `PrayerNotFound` when no row was removed.
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    async fn set_answered(
        &self,
        id: Uuid,
        answered: bool,
        answered_at: Option<DateTime<Utc>>,
    ) -> RepoResult<Prayer>;

    async fn count_all(&self) -> RepoResult<i64>;

    async fn count_answered(&self) -> RepoResult<i64>;

    async fn recent(&self, limit: i64) -> RepoResult<Vec<PrayerSummary>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert a reaction.
    ///
    /// Fails with `ReactionAlreadyExists` on a (prayer, member, type) duplicate.
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    async fn counts_for_prayer(&self, prayer_id: Uuid) -> RepoResult<ReactionCounts>;
}

// ============================================================================
// Supporter Repository
// ============================================================================

#[async_trait]
pub trait SupporterRepository: Send + Sync {
    /// Filtered list ordered by `supported_on`, then `created_at`, newest first
    async fn list(&self, filter: &SupporterFilter) -> RepoResult<Vec<Supporter>>;

    /// Insert when `draft.id` is none, otherwise update that row
    async fn upsert(&self, draft: &SupporterDraft) -> RepoResult<Supporter>;

    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    async fn totals(&self) -> RepoResult<SupporterTotals>;

    async fn recent(&self, limit: i64) -> RepoResult<Vec<Supporter>>;

    /// Rows supported on or after the given day
    async fn supported_since(&self, since: NaiveDate) -> RepoResult<Vec<Supporter>>;
}

// ============================================================================
// Inquiry Repository
// ============================================================================

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn create(&self, inquiry: &NewInquiry) -> RepoResult<Inquiry>;

    /// Newest first, optionally filtered by status
    async fn list(&self, status: Option<InquiryStatus>) -> RepoResult<Vec<Inquiry>>;

    async fn update_status(
        &self,
        id: Uuid,
        status: InquiryStatus,
        responded_at: Option<DateTime<Utc>>,
    ) -> RepoResult<Inquiry>;

    async fn count_by_status(&self, status: InquiryStatus) -> RepoResult<i64>;
}

// ============================================================================
// Settings Repository
// ============================================================================

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// The first settings row by `created_at`
    async fn current(&self) -> RepoResult<Option<SiteSettings>>;

    /// Update the current row, creating it when none exists
    async fn save(&self, changes: &SettingsChanges) -> RepoResult<SiteSettings>;
}
