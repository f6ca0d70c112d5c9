//! Devotion handlers
//!
//! Public reads plus the member create/update/delete lifecycle. Admin
//! deletion goes through the same `delete_devotion` handler.

use axum::{extract::State, Json};
use wiruda_service::dto::{
    CreatedResponse, DevotionListItem, DevotionQuery, DevotionRequest, DevotionResponse,
    PageResponse,
};
use wiruda_service::services::DevotionService;

use crate::extractors::{CurrentProfile, IdPath, JsonBody, QueryParams};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List devotions, newest first
///
/// GET /devotions
pub async fn list_devotions(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<DevotionQuery>,
) -> ApiResult<Json<PageResponse<DevotionListItem>>> {
    let service = DevotionService::new(state.service_context());
    Ok(Json(service.list(&query).await?))
}

/// Get a devotion; signed-in viewers are counted once
///
/// GET /devotions/:id
pub async fn get_devotion(
    State(state): State<AppState>,
    viewer: CurrentProfile,
    IdPath(devotion_id): IdPath,
) -> ApiResult<Json<DevotionResponse>> {
    let service = DevotionService::new(state.service_context());
    let devotion = service.detail(viewer.profile(), devotion_id).await?;
    Ok(Json(devotion))
}

/// Publish a devotion (approved members)
///
/// POST /devotions
pub async fn create_devotion(
    State(state): State<AppState>,
    caller: CurrentProfile,
    JsonBody(request): JsonBody<DevotionRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = DevotionService::new(state.service_context());
    let created = service.create(caller.profile(), request).await?;
    Ok(Created(Json(created)))
}

/// Edit a devotion (author or admin)
///
/// PUT /devotions/:id
pub async fn update_devotion(
    State(state): State<AppState>,
    caller: CurrentProfile,
    IdPath(devotion_id): IdPath,
    JsonBody(request): JsonBody<DevotionRequest>,
) -> ApiResult<Json<DevotionResponse>> {
    let service = DevotionService::new(state.service_context());
    let devotion = service
        .update(caller.profile(), devotion_id, request)
        .await?;
    Ok(Json(devotion))
}

/// Delete a devotion and its image (author or admin)
///
/// DELETE /devotions/:id
pub async fn delete_devotion(
    State(state): State<AppState>,
    caller: CurrentProfile,
    IdPath(devotion_id): IdPath,
) -> ApiResult<NoContent> {
    let service = DevotionService::new(state.service_context());
    service.delete(caller.profile(), devotion_id).await?;
    Ok(NoContent)
}
