//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in wiruda-core.
//! Each repository handles database operations for a specific domain entity.

mod credential;
mod devotion;
mod error;
mod inquiry;
mod prayer;
mod profile;
mod reaction;
mod settings;
mod supporter;

pub use credential::PgCredentialRepository;
pub use devotion::PgDevotionRepository;
pub use inquiry::PgInquiryRepository;
pub use prayer::PgPrayerRepository;
pub use profile::PgProfileRepository;
pub use reaction::PgReactionRepository;
pub use settings::PgSettingsRepository;
pub use supporter::PgSupporterRepository;
