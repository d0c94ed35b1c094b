//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{channels, health, messages, translate};
use crate::state::AppState;

/// Gateway routes subject to inbound rate limiting
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/channels", get(channels::list_channels))
        .route("/channels/:channel_id/messages", get(messages::get_messages_by_id))
        .route(
            "/channels/by-username/:username/messages",
            get(messages::get_messages_by_username),
        )
        .route("/translate", post(translate::translate))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}
