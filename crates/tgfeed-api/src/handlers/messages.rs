//! Message handlers
//!
//! Both endpoints share the retrieval routine; they differ only in how the
//! channel is named.

use axum::{
    extract::{Path, State},
    Json,
};
use tgfeed_service::{MessageResponse, MessageService};

use crate::extractors::HistoryQuery;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get messages of a channel by numeric id
///
/// GET /channels/{channel_id}/messages
pub async fn get_messages_by_id(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    history: HistoryQuery,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let channel_id = channel_id
        .trim()
        .parse::<i64>()
        .map_err(|_| ApiError::invalid_path("Invalid channel_id format"))?;

    let service = MessageService::new(state.service_context());
    let messages = service
        .get_messages_by_id(channel_id, history.query, history.translate)
        .await?;
    Ok(Json(messages))
}

/// Get messages of a channel by public handle
///
/// GET /channels/by-username/{username}/messages
pub async fn get_messages_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
    history: HistoryQuery,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    if username.trim_start_matches('@').trim().is_empty() {
        return Err(ApiError::invalid_path("username must not be empty"));
    }

    let service = MessageService::new(state.service_context());
    let messages = service
        .get_messages_by_username(&username, history.query, history.translate)
        .await?;
    Ok(Json(messages))
}
