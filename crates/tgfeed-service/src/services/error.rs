//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use std::fmt;

use serde_json::json;
use tgfeed_core::DomainError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Bad caller input
    Validation(String),

    /// Channel reference the backend could not resolve
    ChannelNotFound(String),

    /// Backend flood control, carrying the mandated wait
    RateLimited { seconds: u32 },

    /// Any other backend failure, message already prefixed with its context
    Backend(String),

    /// No local translation engine is configured
    TranslatorNotInstalled,

    /// Requested language is not installed in the local engine
    LanguageNotInstalled { code: String, installed: Vec<String> },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::ChannelNotFound(msg) => write!(f, "Channel not found: {msg}"),
            Self::RateLimited { seconds } => write!(f, "Rate limited. Wait {seconds} seconds"),
            Self::Backend(msg) => f.write_str(msg),
            Self::TranslatorNotInstalled => {
                f.write_str("Offline translation is not available: no local translation engine is installed")
            }
            Self::LanguageNotInstalled { code, installed } => write!(
                f,
                "Language '{code}' is not installed for offline translation. Installed: {}",
                installed.join(", ")
            ),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a backend error prefixed with what was being attempted
    pub fn backend(context: &str, err: impl fmt::Display) -> Self {
        Self::Backend(format!("{context}: {err}"))
    }

    /// Map a messaging backend failure
    ///
    /// Unresolvable channels and flood control keep their own kinds; anything
    /// else becomes a backend error prefixed with `context`.
    pub fn from_domain(context: &str, err: DomainError) -> Self {
        match err {
            DomainError::ChannelNotFound(msg) => Self::ChannelNotFound(msg),
            DomainError::FloodWait { seconds } => Self::RateLimited { seconds },
            other => Self::backend(context, other),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::LanguageNotInstalled { .. } => 400,
            Self::ChannelNotFound(_) => 404,
            Self::RateLimited { .. } => 429,
            Self::Backend(_) | Self::TranslatorNotInstalled => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::Backend(_) => "BACKEND_ERROR",
            Self::TranslatorNotInstalled => "TRANSLATOR_NOT_INSTALLED",
            Self::LanguageNotInstalled { .. } => "LANGUAGE_NOT_INSTALLED",
        }
    }

    /// Structured details for the error body
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::RateLimited { seconds } => Some(json!({ "retry_after": seconds })),
            Self::LanguageNotInstalled { code, installed } => {
                Some(json!({ "requested": code, "installed": installed }))
            }
            _ => None,
        }
    }

    /// Mandated wait in seconds, for rate limit errors
    pub fn retry_after(&self) -> Option<u32> {
        match self {
            Self::RateLimited { seconds } => Some(*seconds),
            _ => None,
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
