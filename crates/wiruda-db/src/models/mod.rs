//! Database models - SQLx-compatible structs for PostgreSQL tables

mod content;
mod inquiry;
mod profile;
mod settings;
mod supporter;

pub use content::{
    DevotionActivityModel, DevotionDetailModel, DevotionExportModel, DevotionMetricModel,
    DevotionModel, DevotionSummaryModel, PrayerModel, PrayerRowModel, ReactionCountModel,
};
pub use inquiry::InquiryModel;
pub use profile::{CredentialModel, MemberListingModel, ProfileModel};
pub use settings::SiteSettingsModel;
pub use supporter::{SupporterModel, SupporterTotalsModel};
