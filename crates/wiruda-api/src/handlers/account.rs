//! Member self-service handlers

use axum::{extract::State, Json};
use wiruda_service::dto::{ProfileResponse, UpdateAccountRequest};
use wiruda_service::services::AccountService;

use crate::extractors::{CurrentProfile, JsonBody};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the caller's profile
///
/// GET /account
pub async fn get_account(
    State(state): State<AppState>,
    caller: CurrentProfile,
) -> ApiResult<Json<ProfileResponse>> {
    let service = AccountService::new(state.service_context());
    Ok(Json(service.get(caller.profile())?))
}

/// Update the caller's name, phone and join reason
///
/// PATCH /account
pub async fn update_account(
    State(state): State<AppState>,
    caller: CurrentProfile,
    JsonBody(request): JsonBody<UpdateAccountRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = AccountService::new(state.service_context());
    let profile = service.update(caller.profile(), request).await?;
    Ok(Json(profile))
}
