//! Admin handlers
//!
//! Dashboards, member moderation, supporters and inquiries. Every
//! service call here checks for the admin role itself.

use axum::{extract::State, Json};
use wiruda_service::dto::{
    DevotionMetricsResponse, DevotionMonthBucket, InquiryQuery, InquiryResponse,
    InquiryStatusRequest, MemberQuery, MemberResponse, MemberRoleRequest, MemberStatusRequest,
    MonthsQuery, OverviewResponse, PrayerMetricsResponse, ProfileResponse, SupporterMonthBucket,
    SupporterQuery, SupporterRequest, SupporterResponse,
};
use wiruda_service::services::{
    AggregationService, InquiryService, MemberService, SupporterService,
};

use crate::extractors::{CurrentProfile, IdPath, JsonBody, QueryParams};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

// ============================================================================
// Dashboard
// ============================================================================

/// GET /admin/overview
pub async fn overview(
    State(state): State<AppState>,
    caller: CurrentProfile,
) -> ApiResult<Json<OverviewResponse>> {
    let service = AggregationService::new(state.service_context());
    Ok(Json(service.overview(caller.profile()).await?))
}

/// GET /admin/metrics/devotions
pub async fn devotion_metrics(
    State(state): State<AppState>,
    caller: CurrentProfile,
) -> ApiResult<Json<DevotionMetricsResponse>> {
    let service = AggregationService::new(state.service_context());
    Ok(Json(service.devotion_metrics(caller.profile()).await?))
}

/// Devotion counts and views per month
///
/// GET /admin/metrics/devotions/monthly?months=6
pub async fn devotion_monthly(
    State(state): State<AppState>,
    caller: CurrentProfile,
    QueryParams(query): QueryParams<MonthsQuery>,
) -> ApiResult<Json<Vec<DevotionMonthBucket>>> {
    let service = AggregationService::new(state.service_context());
    let buckets = service
        .devotion_monthly(caller.profile(), query.months)
        .await?;
    Ok(Json(buckets))
}

/// GET /admin/metrics/prayers
pub async fn prayer_metrics(
    State(state): State<AppState>,
    caller: CurrentProfile,
) -> ApiResult<Json<PrayerMetricsResponse>> {
    let service = AggregationService::new(state.service_context());
    Ok(Json(service.prayer_metrics(caller.profile()).await?))
}

/// Supporter count and amount per month
///
/// GET /admin/metrics/supporters/monthly
pub async fn supporter_monthly(
    State(state): State<AppState>,
    caller: CurrentProfile,
    QueryParams(query): QueryParams<MonthsQuery>,
) -> ApiResult<Json<Vec<SupporterMonthBucket>>> {
    let service = AggregationService::new(state.service_context());
    let buckets = service
        .supporter_monthly(caller.profile(), query.months)
        .await?;
    Ok(Json(buckets))
}

// ============================================================================
// Members
// ============================================================================

/// GET /admin/members
pub async fn list_members(
    State(state): State<AppState>,
    caller: CurrentProfile,
    QueryParams(query): QueryParams<MemberQuery>,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    Ok(Json(service.list(caller.profile(), &query).await?))
}

/// Approve, reject or block a member
///
/// PATCH /admin/members/:id/status
pub async fn update_member_status(
    State(state): State<AppState>,
    caller: CurrentProfile,
    IdPath(member_id): IdPath,
    JsonBody(request): JsonBody<MemberStatusRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = MemberService::new(state.service_context());
    let profile = service
        .update_status(caller.profile(), member_id, request)
        .await?;
    Ok(Json(profile))
}

/// PATCH /admin/members/:id/role
pub async fn update_member_role(
    State(state): State<AppState>,
    caller: CurrentProfile,
    IdPath(member_id): IdPath,
    JsonBody(request): JsonBody<MemberRoleRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = MemberService::new(state.service_context());
    let profile = service
        .update_role(caller.profile(), member_id, request)
        .await?;
    Ok(Json(profile))
}

// ============================================================================
// Supporters
// ============================================================================

/// GET /admin/supporters
pub async fn list_supporters(
    State(state): State<AppState>,
    caller: CurrentProfile,
    QueryParams(query): QueryParams<SupporterQuery>,
) -> ApiResult<Json<Vec<SupporterResponse>>> {
    let service = SupporterService::new(state.service_context());
    Ok(Json(service.list(caller.profile(), &query).await?))
}

/// Insert a supporter, or update it when the body carries an `id`
///
/// POST /admin/supporters
pub async fn save_supporter(
    State(state): State<AppState>,
    caller: CurrentProfile,
    JsonBody(request): JsonBody<SupporterRequest>,
) -> ApiResult<Json<SupporterResponse>> {
    let service = SupporterService::new(state.service_context());
    let supporter = service.upsert(caller.profile(), request).await?;
    Ok(Json(supporter))
}

/// DELETE /admin/supporters/:id
pub async fn delete_supporter(
    State(state): State<AppState>,
    caller: CurrentProfile,
    IdPath(supporter_id): IdPath,
) -> ApiResult<NoContent> {
    let service = SupporterService::new(state.service_context());
    service.delete(caller.profile(), supporter_id).await?;
    Ok(NoContent)
}

// ============================================================================
// Inquiries
// ============================================================================

/// GET /admin/inquiries
pub async fn list_inquiries(
    State(state): State<AppState>,
    caller: CurrentProfile,
    QueryParams(query): QueryParams<InquiryQuery>,
) -> ApiResult<Json<Vec<InquiryResponse>>> {
    let service = InquiryService::new(state.service_context());
    Ok(Json(service.list(caller.profile(), query).await?))
}

/// PATCH /admin/inquiries/:id/status
pub async fn update_inquiry_status(
    State(state): State<AppState>,
    caller: CurrentProfile,
    IdPath(inquiry_id): IdPath,
    JsonBody(request): JsonBody<InquiryStatusRequest>,
) -> ApiResult<Json<InquiryResponse>> {
    let service = InquiryService::new(state.service_context());
    let inquiry = service
        .update_status(caller.profile(), inquiry_id, request)
        .await?;
    Ok(Json(inquiry))
}
