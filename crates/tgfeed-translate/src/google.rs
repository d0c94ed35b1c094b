//! Cloud translator backed by Google's public `gtx` endpoint

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tgfeed_core::traits::CloudTranslator;
use tgfeed_core::TranslationError;
use tracing::{debug, instrument};

use crate::client::{check_status, http_client, HttpClientConfig};

const TRANSLATE_PATH: &str = "/translate_a/single";

/// Google cloud translator
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    /// Create a translator talking to `base_url` with an existing client
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a translator from the service configuration
    pub fn from_config(config: &tgfeed_common::TranslationConfig) -> Result<Self, TranslationError> {
        let client = http_client(&HttpClientConfig::from(config))?;
        Ok(Self::new(client, config.cloud_base_url.as_str()))
    }
}

/// Join the translated segments of a `gtx` response
///
/// The payload is a nested array whose first element lists
/// `[translated, original, ...]` segments.
fn parse_segments(payload: &Value) -> Result<String, TranslationError> {
    let segments = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::Malformed("missing translation segments".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(part);
        }
    }
    Ok(translated)
}

#[async_trait]
impl CloudTranslator for GoogleTranslator {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn translate(&self, source: &str, target: &str, text: &str) -> Result<String, TranslationError> {
        let url = format!("{}{TRANSLATE_PATH}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::Transport(e.to_string()))?;

        let payload: Value = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TranslationError::Malformed(e.to_string()))?;

        let translated = parse_segments(&payload)?;
        debug!(chars = translated.chars().count(), "Cloud translation received");
        Ok(translated)
    }
}
