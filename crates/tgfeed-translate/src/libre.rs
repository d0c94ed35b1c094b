//! Local translation engine reached over loopback HTTP
//!
//! Talks to a LibreTranslate instance: `GET /languages` lists the installed
//! language models and `POST /translate` translates between two of them.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tgfeed_core::traits::LocalTranslator;
use tgfeed_core::{InstalledLanguage, TranslationError};
use tracing::{debug, info, instrument};

use crate::client::{check_status, http_client, HttpClientConfig};

/// LibreTranslate engine
#[derive(Debug, Clone)]
pub struct LibreTranslateEngine {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct LanguageEntry {
    code: String,
    name: String,
    #[serde(default)]
    targets: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateReply {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: String,
}

impl LibreTranslateEngine {
    /// Create an engine client talking to `base_url`
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create the engine from configuration; `None` when no engine is configured
    pub fn from_config(config: &tgfeed_common::TranslationConfig) -> Result<Option<Self>, TranslationError> {
        let Some(base_url) = config.offline_base_url.as_deref() else {
            return Ok(None);
        };
        let client = http_client(&HttpClientConfig::from(config))?;
        info!(url = %base_url, "Local translation engine configured");
        Ok(Some(Self::new(client, base_url)))
    }

    /// Map an engine error reply, preferring its `error` message
    async fn engine_error(response: reqwest::Response) -> Result<reqwest::Response, TranslationError> {
        match check_status(response).await {
            Err(TranslationError::Status { status, body }) => Err(serde_json::from_str::<ErrorReply>(&body)
                .map_or(TranslationError::Status { status, body }, |reply| {
                    TranslationError::Engine(reply.error)
                })),
            other => other,
        }
    }
}

#[async_trait]
impl LocalTranslator for LibreTranslateEngine {
    #[instrument(skip(self))]
    async fn installed_languages(&self) -> Result<Vec<InstalledLanguage>, TranslationError> {
        let response = self
            .client
            .get(format!("{}/languages", self.base_url))
            .send()
            .await
            .map_err(|e| TranslationError::Transport(e.to_string()))?;

        let entries: Vec<LanguageEntry> = Self::engine_error(response)
            .await?
            .json()
            .await
            .map_err(|e| TranslationError::Malformed(e.to_string()))?;

        debug!(count = entries.len(), "Installed languages listed");
        Ok(entries
            .into_iter()
            .map(|entry| InstalledLanguage {
                code: entry.code,
                name: entry.name,
                targets: entry.targets,
            })
            .collect())
    }

    #[instrument(skip(self, from, to, text), fields(from = %from.code, to = %to.code))]
    async fn translate(
        &self,
        from: &InstalledLanguage,
        to: &InstalledLanguage,
        text: &str,
    ) -> Result<String, TranslationError> {
        let body = TranslateBody {
            q: text,
            source: &from.code,
            target: &to.code,
            format: "text",
        };
        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::Transport(e.to_string()))?;

        let reply: TranslateReply = Self::engine_error(response)
            .await?
            .json()
            .await
            .map_err(|e| TranslationError::Malformed(e.to_string()))?;
        Ok(reply.translated_text)
    }
}
