//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use tgfeed_core::{Channel, Message, Reaction};

use super::responses::{ChannelResponse, MessageResponse, ReactionResponse};

// ============================================================================
// Channel Mappers
// ============================================================================

impl From<Channel> for ChannelResponse {
    fn from(channel: Channel) -> Self {
        Self {
            id: channel.id,
            title: channel.title,
            username: channel.username,
            participants_count: channel.participants_count,
        }
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self {
            emoji: reaction.emoji,
            count: reaction.count,
        }
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

/// Message with its text resolved and reactions extracted
#[derive(Debug, Clone)]
pub struct ResolvedMessage {
    pub message: Message,
    pub text: String,
    pub reactions: Option<Vec<Reaction>>,
}

impl From<ResolvedMessage> for MessageResponse {
    fn from(resolved: ResolvedMessage) -> Self {
        let ResolvedMessage {
            message,
            text,
            reactions,
        } = resolved;
        let (sender_id, sender_username) = message
            .sender
            .as_ref()
            .map_or((None, None), tgfeed_core::Sender::identity);

        Self {
            id: message.id,
            date: message.date,
            text,
            sender_id,
            sender_username,
            views: message.views,
            forwards: message.forwards,
            reactions: reactions.map(|list| list.into_iter().map(ReactionResponse::from).collect()),
        }
    }
}
