//! Ports - the interfaces the domain needs from infrastructure

mod repositories;
mod storage;

pub use repositories::{
    CredentialRepository, DevotionRepository, InquiryRepository, PrayerRepository,
    ProfileRepository, ReactionRepository, RepoResult, SettingsRepository, SupporterRepository,
};
pub use storage::ImageStorage;
