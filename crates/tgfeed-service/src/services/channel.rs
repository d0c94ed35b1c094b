//! Channel service
//!
//! Enumerates the channels visible to the session.

use tracing::{info, instrument};

use crate::dto::ChannelResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Channel service
pub struct ChannelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelService<'a> {
    /// Create a new ChannelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every channel-type dialog, in dialog order
    #[instrument(skip(self))]
    pub async fn list_channels(&self) -> ServiceResult<Vec<ChannelResponse>> {
        let dialogs = self
            .ctx
            .session()
            .dialogs()
            .await
            .map_err(|e| ServiceError::backend("Error listing channels", e))?;

        let channels: Vec<ChannelResponse> = dialogs
            .into_iter()
            .filter_map(tgfeed_core::Dialog::into_channel)
            .map(ChannelResponse::from)
            .collect();

        info!(count = channels.len(), "Listed channels");
        Ok(channels)
    }
}
