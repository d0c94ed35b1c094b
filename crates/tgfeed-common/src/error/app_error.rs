//! Application error types
//!
//! Startup and serve-loop failures of both binaries. Request-level errors
//! live in the service and API layers.

use std::fmt;
use std::net::SocketAddr;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Messaging session errors
    #[error("Messaging session error: {0}")]
    Session(String),

    // Translation backend setup
    #[error("Translator setup failed: {0}")]
    Translator(String),

    // Listener / serve loop
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl AppError {
    /// Short machine-readable code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Session(_) => "SESSION_ERROR",
            Self::Translator(_) => "TRANSLATOR_ERROR",
            Self::Bind { .. } => "BIND_ERROR",
            Self::Serve(_) => "SERVE_ERROR",
        }
    }

    /// Create a session error
    #[must_use]
    pub fn session(err: impl fmt::Display) -> Self {
        Self::Session(err.to_string())
    }

    /// Create a translator setup error
    #[must_use]
    pub fn translator(err: impl fmt::Display) -> Self {
        Self::Translator(err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
