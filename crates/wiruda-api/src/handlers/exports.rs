//! CSV export handlers (admin)
//!
//! The date range is checked before the session is resolved, so a bad
//! filter is rejected without touching the database.

use axum::{extract::State, http::HeaderMap};
use wiruda_core::entities::Profile;
use wiruda_service::dto::{DevotionQuery, SupporterQuery};
use wiruda_service::services::{ExportService, SessionService};

use crate::extractors::{session_token, QueryParams};
use crate::response::{ApiError, ApiResult, CsvFile};
use crate::state::AppState;

async fn resolve_caller(state: &AppState, headers: &HeaderMap) -> ApiResult<Option<Profile>> {
    let token = session_token(headers);
    let profile = SessionService::new(state.service_context())
        .resolve(token.as_deref())
        .await?;
    Ok(profile)
}

/// GET /admin/exports/devotions
pub async fn export_devotions(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParams(query): QueryParams<DevotionQuery>,
) -> ApiResult<CsvFile> {
    query.filter().map_err(|_| ApiError::InvalidExportRange)?;

    let caller = resolve_caller(&state, &headers).await?;
    let service = ExportService::new(state.service_context());
    let export = service.devotions(caller.as_ref(), &query).await?;
    Ok(CsvFile(export))
}

/// GET /admin/exports/supporters
pub async fn export_supporters(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParams(query): QueryParams<SupporterQuery>,
) -> ApiResult<CsvFile> {
    query.filter().map_err(|_| ApiError::InvalidExportRange)?;

    let caller = resolve_caller(&state, &headers).await?;
    let service = ExportService::new(state.service_context());
    let export = service.supporters(caller.as_ref(), &query).await?;
    Ok(CsvFile(export))
}
