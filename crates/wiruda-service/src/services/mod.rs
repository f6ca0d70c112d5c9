//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! access checks, validation, and orchestration of domain operations.

pub mod account;
pub mod aggregation;
pub mod auth;
pub mod context;
pub mod devotion;
pub mod error;
pub mod export;
pub mod image;
pub mod inquiry;
pub mod member;
pub mod prayer;
pub mod reaction;
pub mod session;
pub mod settings;
pub mod supporter;

#[cfg(test)]
pub(crate) mod fakes;

// Re-export all services for convenience
pub use account::AccountService;
pub use aggregation::AggregationService;
pub use auth::{sanitize_redirect, AuthService};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use devotion::DevotionService;
pub use error::{ServiceError, ServiceResult};
pub use export::{CsvExport, ExportService};
pub use image::ImageCleaner;
pub use inquiry::InquiryService;
pub use member::MemberService;
pub use prayer::PrayerService;
pub use reaction::ReactionService;
pub use session::SessionService;
pub use settings::SettingsService;
pub use supporter::SupporterService;
