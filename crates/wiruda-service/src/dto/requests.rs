//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate`; query DTOs convert into
//! the domain filters.

use std::str::FromStr;

use serde::de::{value::StringDeserializer, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use wiruda_core::entities::{
    DevotionFilter, ImageFilter, InquiryStatus, MemberFilter, MemberRole, PrayerFilter,
    PrayerStatusFilter, ProfileStatus, ReactionType, SupporterFilter,
};
use wiruda_core::error::DomainError;
use wiruda_core::value_objects::{parse_day, DateRange, PageRequest};

// ============================================================================
// Field validators
// ============================================================================

/// Digits, `+`, `-`, parentheses and spaces. Blank counts as absent.
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    if phone.is_empty()
        || phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
    {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message("Invalid phone number".into()))
    }
}

/// Absolute http(s) URL. Blank counts as absent.
fn validate_image_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    match url::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::new("url").with_message("Invalid image URL".into())),
    }
}

fn validate_day(value: &str) -> Result<(), ValidationError> {
    match parse_day(Some(value)) {
        Ok(Some(_)) => Ok(()),
        _ => Err(ValidationError::new("date").with_message("Expected YYYY-MM-DD".into())),
    }
}

// ============================================================================
// Query value readers
// ============================================================================

/// Number from a query string. Blank or unparseable values count as absent.
fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.trim().parse().ok()))
}

/// Keyword from a query string. Blank counts as absent; unknown keywords
/// are still rejected.
fn blank_keyword<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match non_blank(Option::<String>::deserialize(deserializer)?.as_deref()) {
        None => Ok(None),
        Some(keyword) => T::deserialize(StringDeserializer::<D::Error>::new(keyword)).map(Some),
    }
}

/// Trimmed value, `None` when blank
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Member registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub password_confirm: String,

    #[validate(length(min = 2, max = 60, message = "Name must be 2-60 characters"))]
    pub full_name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(length(min = 10, max = 500, message = "Join reason must be 10-500 characters"))]
    pub join_reason: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    /// Path to continue at after login
    #[serde(default, alias = "redirectTo")]
    pub redirect_to: Option<String>,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Account Requests
// ============================================================================

/// Member's own profile edit
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(length(min = 2, max = 60, message = "Name must be 2-60 characters"))]
    pub full_name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(length(min = 10, max = 500, message = "Join reason must be 10-500 characters"))]
    pub join_reason: String,
}

// ============================================================================
// Content Requests
// ============================================================================

/// Create or update a devotion
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DevotionRequest {
    #[validate(length(min = 3, max = 120, message = "Title must be 3-120 characters"))]
    pub title: String,

    #[validate(length(min = 2, max = 80, message = "Scripture reference must be 2-80 characters"))]
    pub scripture_ref: String,

    #[validate(length(min = 5, message = "Scripture text must be at least 5 characters"))]
    pub scripture_text: String,

    #[validate(length(min = 50, message = "Body must be at least 50 characters"))]
    pub body: String,

    #[validate(custom(function = "validate_image_url"))]
    pub image_url: Option<String>,
}

/// Create or update a prayer
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PrayerRequest {
    #[validate(length(min = 10, max = 4000, message = "Prayer must be 10-4000 characters"))]
    pub content: String,

    #[validate(custom(function = "validate_image_url"))]
    pub image_url: Option<String>,
}

/// React to a prayer
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReactionRequest {
    #[serde(alias = "type")]
    pub reaction_type: ReactionType,
}

/// Admin answered toggle
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AnsweredRequest {
    pub is_answered: bool,
}

// ============================================================================
// Support Requests
// ============================================================================

/// Public inquiry form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InquiryRequest {
    #[validate(length(min = 2, max = 60, message = "Name must be 2-60 characters"))]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 120, message = "Email must be at most 120 characters")
    )]
    pub email: String,

    #[validate(length(max = 60, message = "Phone must be at most 60 characters"))]
    pub phone: Option<String>,

    #[validate(length(min = 10, max = 1500, message = "Message must be 10-1500 characters"))]
    pub message: String,
}

impl InquiryRequest {
    /// Trim every field; a blank phone becomes `None`
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_blank(self.phone.as_deref()),
            message: self.message.trim().to_string(),
        }
    }
}

/// Admin inquiry status change
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct InquiryStatusRequest {
    pub status: InquiryStatus,
}

/// Supporter insert-or-update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SupporterRequest {
    /// Present for updates
    pub id: Option<Uuid>,

    #[validate(length(min = 2, max = 60, message = "Name must be 2-60 characters"))]
    pub name: String,

    #[validate(range(min = 0, message = "Amount must not be negative"))]
    pub amount: i64,

    #[validate(custom(function = "validate_day"))]
    pub supported_on: String,

    #[validate(length(max = 500, message = "Memo must be at most 500 characters"))]
    pub memo: Option<String>,
}

/// Site settings update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SettingsRequest {
    #[validate(length(min = 3, max = 120, message = "Verse reference must be 3-120 characters"))]
    pub verse_ref: String,

    #[validate(length(min = 5, max = 1500, message = "Verse text must be 5-1500 characters"))]
    pub verse_text: String,

    #[validate(length(min = 5, max = 200, message = "Main prayer must be 5-200 characters"))]
    pub main_prayer: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 120, message = "Email must be at most 120 characters")
    )]
    pub contact_email: String,

    #[serde(default)]
    #[validate(length(max = 60, message = "Phone must be at most 60 characters"))]
    pub contact_phone: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Note must be at most 500 characters"))]
    pub contact_note: String,
}

// ============================================================================
// Admin Member Requests
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MemberStatusRequest {
    pub status: ProfileStatus,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MemberRoleRequest {
    pub role: MemberRole,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Devotion list and export filters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DevotionQuery {
    #[serde(alias = "search")]
    pub q: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub page: Option<u32>,
    #[serde(alias = "pageSize", deserialize_with = "lenient_number")]
    pub page_size: Option<u32>,
    #[serde(alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(alias = "endDate")]
    pub end_date: Option<String>,
    #[serde(alias = "hasImage", deserialize_with = "blank_keyword")]
    pub has_image: Option<ImageFilter>,
}

impl DevotionQuery {
    /// Build the domain filter. Fails on malformed or inverted dates.
    pub fn filter(&self) -> Result<DevotionFilter, DomainError> {
        Ok(DevotionFilter {
            search: non_blank(self.q.as_deref()),
            published: DateRange::parse(self.start_date.as_deref(), self.end_date.as_deref())?,
            has_image: self.has_image.unwrap_or_default(),
        })
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

/// Prayer list filters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrayerQuery {
    #[serde(alias = "search")]
    pub q: Option<String>,
    #[serde(deserialize_with = "blank_keyword")]
    pub status: Option<PrayerStatusFilter>,
    #[serde(deserialize_with = "lenient_number")]
    pub page: Option<u32>,
    #[serde(alias = "pageSize", deserialize_with = "lenient_number")]
    pub page_size: Option<u32>,
}

impl PrayerQuery {
    pub fn filter(&self) -> PrayerFilter {
        PrayerFilter {
            search: non_blank(self.q.as_deref()),
            status: self.status.unwrap_or_default(),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

/// Supporter list and export filters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SupporterQuery {
    #[serde(alias = "search")]
    pub q: Option<String>,
    #[serde(alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(alias = "endDate")]
    pub end_date: Option<String>,
    #[serde(alias = "minAmount", deserialize_with = "lenient_number")]
    pub min_amount: Option<f64>,
    #[serde(alias = "maxAmount", deserialize_with = "lenient_number")]
    pub max_amount: Option<f64>,
}

impl SupporterQuery {
    pub fn filter(&self) -> Result<SupporterFilter, DomainError> {
        Ok(SupporterFilter {
            search: non_blank(self.q.as_deref()),
            supported: DateRange::parse(self.start_date.as_deref(), self.end_date.as_deref())?,
            min_amount: self.min_amount.filter(|v| v.is_finite()),
            max_amount: self.max_amount.filter(|v| v.is_finite()),
        })
    }
}

/// Admin member list filters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MemberQuery {
    #[serde(alias = "search")]
    pub q: Option<String>,
    #[serde(deserialize_with = "blank_keyword")]
    pub status: Option<ProfileStatus>,
}

impl MemberQuery {
    pub fn filter(&self) -> MemberFilter {
        MemberFilter {
            search: non_blank(self.q.as_deref()),
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct InquiryQuery {
    #[serde(deserialize_with = "blank_keyword")]
    pub status: Option<InquiryStatus>,
}

/// Lookback window for monthly summaries
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct MonthsQuery {
    #[serde(deserialize_with = "lenient_number")]
    pub months: Option<u32>,
}

/// Query accepted by the login page and endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RedirectQuery {
    #[serde(alias = "redirectTo")]
    pub redirect_to: Option<String>,
}
