//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Profile not found: {0}")]
    ProfileNotFound(Uuid),

    #[error("Devotion not found: {0}")]
    DevotionNotFound(Uuid),

    #[error("Prayer not found: {0}")]
    PrayerNotFound(Uuid),

    #[error("Supporter not found: {0}")]
    SupporterNotFound(Uuid),

    #[error("Inquiry not found: {0}")]
    InquiryNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Invalid image URL")]
    InvalidImageUrl,

    #[error("Start date must not be after end date")]
    InvalidDateRange,

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    #[error("Login required")]
    LoginRequired,

    #[error("No permission")]
    Forbidden,

    #[error("Account blocked")]
    AccountBlocked,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Reaction already exists")]
    ReactionAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::DevotionNotFound(_) => "UNKNOWN_DEVOTION",
            Self::PrayerNotFound(_) => "UNKNOWN_PRAYER",
            Self::SupporterNotFound(_) => "UNKNOWN_SUPPORTER",
            Self::InquiryNotFound(_) => "UNKNOWN_INQUIRY",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidImageUrl => "INVALID_IMAGE_URL",
            Self::InvalidDateRange => "INVALID_DATE_RANGE",

            // Authentication / Authorization
            Self::LoginRequired => "LOGIN_REQUIRED",
            Self::Forbidden => "FORBIDDEN",
            Self::AccountBlocked => "ACCOUNT_BLOCKED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::ReactionAlreadyExists => "REACTION_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound(_)
                | Self::DevotionNotFound(_)
                | Self::PrayerNotFound(_)
                | Self::SupporterNotFound(_)
                | Self::InquiryNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::WeakPassword(_)
                | Self::InvalidImageUrl
                | Self::InvalidDateRange
        )
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::LoginRequired)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Forbidden | Self::AccountBlocked)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::ReactionAlreadyExists)
    }
}
