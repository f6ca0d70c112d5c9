//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs, and query filters
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AnsweredRequest, DevotionQuery, DevotionRequest, InquiryQuery, InquiryRequest,
    InquiryStatusRequest, LoginRequest, MemberQuery, MemberRoleRequest, MemberStatusRequest,
    MonthsQuery, PrayerQuery, PrayerRequest, ReactionRequest, RedirectQuery, RefreshTokenRequest,
    RegisterRequest, SettingsRequest, SupporterQuery, SupporterRequest, UpdateAccountRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, AuthorResponse, CreatedResponse, DevotionListItem, DevotionMetricsResponse,
    DevotionMonthBucket, DevotionResponse, HealthChecks, HealthResponse, InquiryResponse,
    LoginResponse, MemberCounts, MemberResponse, OverviewResponse, PageResponse, PrayerListItem,
    PrayerMetricsResponse, PrayerResponse, ProfileResponse, ReactionResponse, ReadinessResponse,
    RecentDevotion, RecentPrayer, RecentSupporter, RegisterResponse, SettingsResponse,
    SupporterMonthBucket, SupporterResponse, TokenResponse, TopDevotion,
};
