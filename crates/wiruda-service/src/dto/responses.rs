//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use wiruda_core::entities::{
    InquiryStatus, MemberRole, ProfileStatus, ReactionCounts, ReactionType,
};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Offset-paginated list
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}

/// Identifier of a newly created row
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

// ============================================================================
// Auth / Profile Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub full_name: String,
    pub phone: Option<String>,
    pub join_reason: Option<String>,
    pub role: MemberRole,
    pub status: ProfileStatus,
    pub created_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Registration result. The client continues at `next`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub profile: ProfileResponse,
    pub next: String,
}

/// Login result with tokens and the post-login destination
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub profile: ProfileResponse,
    pub redirect_to: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Admin member row
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    #[serde(flatten)]
    pub profile: ProfileResponse,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub full_name: String,
    pub role: MemberRole,
    pub status: ProfileStatus,
}

// ============================================================================
// Content Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DevotionListItem {
    pub id: Uuid,
    pub title: String,
    pub scripture_ref: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub views: i64,
    pub published_at: DateTime<Utc>,
    pub author_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DevotionResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub scripture_ref: String,
    pub scripture_text: Option<String>,
    pub body: String,
    pub image_url: Option<String>,
    pub views: i64,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: Option<AuthorResponse>,
    pub author_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrayerListItem {
    pub id: Uuid,
    pub author_id: Uuid,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub is_answered: bool,
    pub answered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub author_name: String,
    pub reactions: ReactionCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrayerResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub image_url: Option<String>,
    pub is_answered: bool,
    pub answered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: Option<AuthorResponse>,
    pub author_name: String,
    pub reactions: ReactionCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub prayer_id: Uuid,
    pub reaction_type: ReactionType,
    pub reactions: ReactionCounts,
}

// ============================================================================
// Admin-managed Rows
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SupporterResponse {
    pub id: Uuid,
    pub name: String,
    pub amount: i64,
    pub supported_on: NaiveDate,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InquiryResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsResponse {
    pub id: Uuid,
    pub verse_ref: String,
    pub verse_text: String,
    pub main_prayer: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_note: String,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Aggregation Responses
// ============================================================================

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MemberCounts {
    pub total: i64,
    pub approved: i64,
    pub pending: i64,
    pub rejected: i64,
    pub blocked: i64,
    pub admins: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentDevotion {
    pub id: Uuid,
    pub title: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentPrayer {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub is_answered: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentSupporter {
    pub id: Uuid,
    pub name: String,
    pub amount: i64,
    pub supported_on: NaiveDate,
}

/// Admin dashboard overview
#[derive(Debug, Clone, Serialize)]
pub struct OverviewResponse {
    pub members: MemberCounts,
    pub total_devotions: i64,
    pub total_prayers: i64,
    pub answered_prayers: i64,
    pub total_supporters: i64,
    pub supporter_amount: i64,
    pub pending_inquiries: i64,
    pub recent_devotions: Vec<RecentDevotion>,
    pub recent_prayers: Vec<RecentPrayer>,
    pub recent_supporters: Vec<RecentSupporter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopDevotion {
    pub id: Uuid,
    pub title: String,
    pub views: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DevotionMetricsResponse {
    pub total: i64,
    pub last_30_days: i64,
    pub with_image: i64,
    pub total_views: i64,
    pub unique_authors: i64,
    pub top: Option<TopDevotion>,
}

/// One calendar month of devotion activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevotionMonthBucket {
    /// `YYYY-MM`
    pub month: String,
    pub label: String,
    pub count: i64,
    pub views: i64,
}

/// One calendar month of supporter records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupporterMonthBucket {
    pub month: String,
    pub label: String,
    pub count: i64,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PrayerMetricsResponse {
    pub total: i64,
    pub answered: i64,
    pub pending: i64,
}

// ============================================================================
// Health
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
