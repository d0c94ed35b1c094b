//! Explicit translation handler

use axum::{extract::State, Json};
use tgfeed_service::{TranslateRequest, TranslateResponse, TranslationService};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Translate text online or with the local engine
///
/// POST /translate
pub async fn translate(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TranslateRequest>,
) -> ApiResult<Json<TranslateResponse>> {
    let service = TranslationService::new(state.service_context());
    let response = service.translate(request).await?;
    Ok(Json(response))
}
