//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Optional fields
//! serialize as `null` rather than being omitted.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tgfeed_core::TranslationMode;

// ============================================================================
// Service Info Responses
// ============================================================================

/// Gateway banner
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

impl RootResponse {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            message: "Telegram Channel API".to_string(),
            version: version.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Whether the messaging session is connected
    pub connected: bool,
}

impl HealthResponse {
    pub fn healthy(connected: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            connected,
        }
    }
}

// ============================================================================
// Channel Responses
// ============================================================================

/// Channel response
#[derive(Debug, Clone, Serialize)]
pub struct ChannelResponse {
    pub id: i64,
    pub title: String,
    pub username: Option<String>,
    pub participants_count: Option<i32>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: i32,
    pub date: DateTime<Utc>,
    /// Resolved text; never null
    pub text: String,
    pub sender_id: Option<i64>,
    pub sender_username: Option<String>,
    pub views: Option<i32>,
    pub forwards: Option<i32>,
    /// Absent rather than empty when the message has no reactions
    pub reactions: Option<Vec<ReactionResponse>>,
}

/// Reaction response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionResponse {
    pub emoji: String,
    pub count: i32,
}

// ============================================================================
// Translation Responses
// ============================================================================

/// Translation result, echoing the parameters actually used
#[derive(Debug, Clone, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub mode: TranslationMode,
}
