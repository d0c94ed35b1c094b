//! Domain errors - failures reported by the messaging backend

use thiserror::Error;

/// Result type for messaging session operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Messaging backend errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    // =========================================================================
    // Flood Control
    // =========================================================================
    #[error("Rate limited. Wait {seconds} seconds")]
    FloodWait { seconds: u32 },

    // =========================================================================
    // Session Errors
    // =========================================================================
    #[error("Session is disconnected")]
    Disconnected,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("{0}")]
    Backend(String),
}

impl DomainError {
    /// Create a not found error from any displayable reference
    pub fn channel_not_found(reference: impl std::fmt::Display) -> Self {
        Self::ChannelNotFound(reference.to_string())
    }

    /// Wrap any backend failure, keeping its message verbatim
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}
