//! Message service
//!
//! Retrieves channel history and flattens it into the response model. Both
//! entry points (numeric id, handle) share one routine that differs only in
//! how the channel is resolved.

use tgfeed_core::traits::MessageQuery;
use tgfeed_core::{ChannelRef, Message};
use tracing::{debug, instrument};

use crate::dto::{MessageResponse, ResolvedMessage};

use super::auto_translate::RussianAutoTranslator;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::reaction::extract_reactions;

/// Allowed page size bounds
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 1000;

const RETRIEVAL_CONTEXT: &str = "Error retrieving messages";

/// Resolve a message's display text
///
/// Plain text wins; a message with only a non-text payload gets a
/// `[Media: <type name>]` placeholder; anything else is empty.
pub fn resolve_text(message: &Message) -> String {
    match (&message.text, &message.media) {
        (Some(text), _) if !text.is_empty() => text.clone(),
        (_, Some(media)) => format!("[Media: {}]", media.type_name()),
        _ => String::new(),
    }
}

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get messages of a channel addressed by numeric id
    pub async fn get_messages_by_id(
        &self,
        channel_id: i64,
        query: MessageQuery,
        translate: bool,
    ) -> ServiceResult<Vec<MessageResponse>> {
        self.retrieve(ChannelRef::Id(channel_id), query, translate).await
    }

    /// Get messages of a channel addressed by its public handle
    pub async fn get_messages_by_username(
        &self,
        username: &str,
        query: MessageQuery,
        translate: bool,
    ) -> ServiceResult<Vec<MessageResponse>> {
        self.retrieve(ChannelRef::username(username), query, translate).await
    }

    /// Shared retrieval routine
    ///
    /// Messages keep the backend's newest-first order. Translation runs per
    /// message, one at a time.
    #[instrument(skip(self), fields(channel = %target))]
    pub async fn retrieve(
        &self,
        target: ChannelRef,
        query: MessageQuery,
        translate: bool,
    ) -> ServiceResult<Vec<MessageResponse>> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&query.limit) {
            return Err(ServiceError::validation(format!(
                "limit must be between {MIN_LIMIT} and {MAX_LIMIT}"
            )));
        }

        let session = self.ctx.session();
        let peer = session
            .resolve(&target)
            .await
            .map_err(|e| ServiceError::from_domain(RETRIEVAL_CONTEXT, e))?;
        let messages = session
            .messages(&peer, &query)
            .await
            .map_err(|e| ServiceError::from_domain(RETRIEVAL_CONTEXT, e))?;

        let translator = RussianAutoTranslator::new(self.ctx);
        let mut responses = Vec::with_capacity(messages.len());
        for message in messages {
            let mut text = resolve_text(&message);
            if translate {
                text = translator.translate(&text).await;
            }
            let reactions = extract_reactions(message.id, message.reactions.as_ref());
            responses.push(MessageResponse::from(ResolvedMessage {
                message,
                text,
                reactions,
            }));
        }

        debug!(count = responses.len(), "Retrieved messages");
        Ok(responses)
    }
}
