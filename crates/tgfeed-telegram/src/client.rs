//! Connection settings and connection-level errors

use std::path::PathBuf;

/// Settings needed to open the MTProto connection
#[derive(Clone)]
pub struct TelegramClientConfig {
    pub api_id: i32,
    pub api_hash: String,
    /// Persisted authorization (created by the login tool)
    pub session_file: PathBuf,
}

impl std::fmt::Debug for TelegramClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClientConfig")
            .field("api_id", &self.api_id)
            .field("session_file", &self.session_file)
            .finish()
    }
}

impl From<&tgfeed_common::TelegramConfig> for TelegramClientConfig {
    fn from(config: &tgfeed_common::TelegramConfig) -> Self {
        Self {
            api_id: config.api_id,
            api_hash: config.api_hash.clone(),
            session_file: config.session_file(),
        }
    }
}

/// Errors raised while acquiring or releasing the session
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("Failed to load session file {path}: {source}")]
    SessionFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to connect to Telegram: {0}")]
    Connect(String),

    #[error("Telegram session is not authorized. Run tgfeed-login first")]
    NotAuthorized,

    #[error("Telegram request failed: {0}")]
    Invocation(String),
}
