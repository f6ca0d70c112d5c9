//! Public support form

use axum::{extract::State, Json};
use wiruda_service::dto::{CreatedResponse, InquiryRequest};
use wiruda_service::services::InquiryService;

use crate::extractors::JsonBody;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit an inquiry. Fields are trimmed before validation, so the body
/// is validated by the service rather than the extractor.
///
/// POST /support
pub async fn submit_inquiry(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<InquiryRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = InquiryService::new(state.service_context());
    let created = service.submit(request).await?;
    Ok(Created(Json(created)))
}
