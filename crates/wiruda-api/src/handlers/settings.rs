//! Site settings handlers

use axum::{extract::State, Json};
use wiruda_service::dto::{SettingsRequest, SettingsResponse};
use wiruda_service::services::SettingsService;

use crate::extractors::{CurrentProfile, JsonBody};
use crate::response::ApiResult;
use crate::state::AppState;

/// Public site settings; `null` until an admin saves them
///
/// GET /settings
pub async fn get_settings(
    State(state): State<AppState>,
) -> ApiResult<Json<Option<SettingsResponse>>> {
    let service = SettingsService::new(state.service_context());
    Ok(Json(service.get().await?))
}

/// Save site settings (admin)
///
/// PUT /admin/settings
pub async fn update_settings(
    State(state): State<AppState>,
    caller: CurrentProfile,
    JsonBody(request): JsonBody<SettingsRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    let service = SettingsService::new(state.service_context());
    let settings = service.update(caller.profile(), request).await?;
    Ok(Json(settings))
}
