//! Channel handlers

use axum::{extract::State, Json};
use tgfeed_service::{ChannelResponse, ChannelService};

use crate::response::ApiResult;
use crate::state::AppState;

/// List channel-type dialogs of the session
///
/// GET /channels
pub async fn list_channels(State(state): State<AppState>) -> ApiResult<Json<Vec<ChannelResponse>>> {
    let service = ChannelService::new(state.service_context());
    let channels = service.list_channels().await?;
    Ok(Json(channels))
}
