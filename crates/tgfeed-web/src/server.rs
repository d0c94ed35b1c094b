//! Presentation Service router and runner

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tgfeed_common::{shutdown_signal, AppError, WebConfig};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::page::render_page;

/// Rendered page, built once at startup
#[derive(Clone)]
pub struct WebState {
    page: Bytes,
}

/// GET /
async fn index(State(state): State<WebState>) -> Html<Bytes> {
    Html(state.page)
}

/// GET /health
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Build the Presentation Service application
pub fn create_app(config: &WebConfig) -> Router {
    let state = WebState {
        page: Bytes::from(render_page(&config.gateway_base_url)),
    };

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            Duration::from_secs(config.web.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the Presentation Service until a shutdown signal arrives
pub async fn run(config: WebConfig) -> Result<(), AppError> {
    let addr = config.web.socket_addr()?;
    let app = create_app(&config);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;

    info!("Presentation Service listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)?;

    Ok(())
}
