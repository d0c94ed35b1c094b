//! Shared HTTP client construction for the translation backends

use std::time::Duration;

use reqwest::Client;
use tgfeed_core::TranslationError;

/// HTTP client settings
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            user_agent: concat!("tgfeed/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl From<&tgfeed_common::TranslationConfig> for HttpClientConfig {
    fn from(config: &tgfeed_common::TranslationConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            ..Self::default()
        }
    }
}

/// Build a client with the given settings
pub fn http_client(config: &HttpClientConfig) -> Result<Client, TranslationError> {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| TranslationError::Transport(e.to_string()))
}

/// Turn a non-success response into an error, keeping the body text
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, TranslationError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(TranslationError::Status {
        status: status.as_u16(),
        body,
    })
}
