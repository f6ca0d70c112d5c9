//! # wiruda-core
//!
//! Domain layer containing entities, value objects, the access policy, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AuthorInfo, Credential, Devotion, DevotionActivity, DevotionChanges, DevotionDetail,
    DevotionExportRow, DevotionFilter, DevotionMetricRow, DevotionSummary, ImageFilter, Inquiry,
    InquiryStatus, MemberFilter, MemberListing, MemberRole, NewDevotion, NewInquiry, NewPrayer,
    Prayer, PrayerChanges, PrayerDetail, PrayerFilter, PrayerStatusFilter, PrayerSummary, Profile,
    ProfileDetails, ProfileStatus, Reaction, ReactionCounts, ReactionType, SettingsChanges,
    SiteSettings, Supporter, SupporterDraft, SupporterFilter, SupporterTotals,
};
pub use error::DomainError;
pub use policy::Denial;
pub use traits::{
    CredentialRepository, DevotionRepository, ImageStorage, InquiryRepository, PrayerRepository,
    ProfileRepository, ReactionRepository, RepoResult, SettingsRepository, SupporterRepository,
};
pub use value_objects::{DateRange, MonthKey, Page, PageRequest};
