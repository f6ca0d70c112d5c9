//! Domain entities - core business objects

mod credential;
mod devotion;
mod inquiry;
mod prayer;
mod profile;
mod reaction;
mod settings;
mod supporter;

pub use credential::Credential;
pub use devotion::{
    Devotion, DevotionActivity, DevotionChanges, DevotionDetail, DevotionExportRow,
    DevotionFilter, DevotionMetricRow, DevotionSummary, ImageFilter, NewDevotion,
};
pub use inquiry::{Inquiry, InquiryStatus, NewInquiry};
pub use prayer::{
    NewPrayer, Prayer, PrayerChanges, PrayerDetail, PrayerFilter, PrayerStatusFilter,
    PrayerSummary,
};
pub use profile::{
    approved_at_for, AuthorInfo, MemberFilter, MemberListing, MemberRole, Profile, ProfileDetails,
    ProfileStatus,
};
pub use reaction::{Reaction, ReactionCounts, ReactionType};
pub use settings::{SettingsChanges, SiteSettings};
pub use supporter::{Supporter, SupporterDraft, SupporterFilter, SupporterTotals};

/// Display name used when a post's author profile is unavailable
pub const ANONYMOUS_AUTHOR: &str = "익명";
