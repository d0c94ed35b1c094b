//! Service identity and liveness handlers

use axum::{extract::State, Json};
use tgfeed_service::{HealthResponse, RootResponse};

use crate::state::AppState;

/// Service identity
///
/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::new(env!("CARGO_PKG_VERSION")))
}

/// Liveness with the messaging session's connection state
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = state.service_context().session().is_connected();
    Json(HealthResponse::healthy(connected))
}
