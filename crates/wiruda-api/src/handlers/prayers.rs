//! Prayer request handlers, including reactions

use axum::{extract::State, Json};
use wiruda_service::dto::{
    AnsweredRequest, CreatedResponse, PageResponse, PrayerListItem, PrayerQuery, PrayerRequest,
    PrayerResponse, ReactionRequest, ReactionResponse,
};
use wiruda_service::services::{PrayerService, ReactionService};

use crate::extractors::{CurrentProfile, IdPath, JsonBody, QueryParams};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /prayers
pub async fn list_prayers(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PrayerQuery>,
) -> ApiResult<Json<PageResponse<PrayerListItem>>> {
    let service = PrayerService::new(state.service_context());
    Ok(Json(service.list(&query).await?))
}

/// GET /prayers/:id
pub async fn get_prayer(
    State(state): State<AppState>,
    IdPath(prayer_id): IdPath,
) -> ApiResult<Json<PrayerResponse>> {
    let service = PrayerService::new(state.service_context());
    Ok(Json(service.detail(prayer_id).await?))
}

/// Post a prayer request (approved members)
///
/// POST /prayers
pub async fn create_prayer(
    State(state): State<AppState>,
    caller: CurrentProfile,
    JsonBody(request): JsonBody<PrayerRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = PrayerService::new(state.service_context());
    let created = service.create(caller.profile(), request).await?;
    Ok(Created(Json(created)))
}

/// PUT /prayers/:id
pub async fn update_prayer(
    State(state): State<AppState>,
    caller: CurrentProfile,
    IdPath(prayer_id): IdPath,
    JsonBody(request): JsonBody<PrayerRequest>,
) -> ApiResult<Json<PrayerResponse>> {
    let service = PrayerService::new(state.service_context());
    let prayer = service.update(caller.profile(), prayer_id, request).await?;
    Ok(Json(prayer))
}

/// DELETE /prayers/:id
pub async fn delete_prayer(
    State(state): State<AppState>,
    caller: CurrentProfile,
    IdPath(prayer_id): IdPath,
) -> ApiResult<NoContent> {
    let service = PrayerService::new(state.service_context());
    service.delete(caller.profile(), prayer_id).await?;
    Ok(NoContent)
}

/// React to a prayer. Repeating a reaction succeeds without adding a row.
///
/// POST /prayers/:id/reactions
pub async fn react_to_prayer(
    State(state): State<AppState>,
    caller: CurrentProfile,
    IdPath(prayer_id): IdPath,
    JsonBody(request): JsonBody<ReactionRequest>,
) -> ApiResult<Json<ReactionResponse>> {
    let service = ReactionService::new(state.service_context());
    let reaction = service.react(caller.profile(), prayer_id, request).await?;
    Ok(Json(reaction))
}

/// Mark a prayer answered or unanswered (admin)
///
/// PATCH /admin/prayers/:id/answered
pub async fn set_prayer_answered(
    State(state): State<AppState>,
    caller: CurrentProfile,
    IdPath(prayer_id): IdPath,
    JsonBody(request): JsonBody<AnsweredRequest>,
) -> ApiResult<Json<PrayerResponse>> {
    let service = PrayerService::new(state.service_context());
    let prayer = service
        .set_answered(caller.profile(), prayer_id, request)
        .await?;
    Ok(Json(prayer))
}
