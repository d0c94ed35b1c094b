//! Application configuration structs
//!
//! Loads configuration from environment variables (and an optional `.env`).

use serde::Deserialize;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Gateway service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub telegram: TelegramConfig,
    pub translation: TranslationConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// Presentation service configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub app: AppSettings,
    pub web: ServerConfig,
    /// Base URL the page's fetch calls are sent to
    pub gateway_base_url: String,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP listener configuration (for both services)
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse the listener address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.address()
            .parse()
            .map_err(|e| ConfigError::InvalidValue("host/port", format!("{}: {e}", self.address())))
    }
}

/// Messaging account credentials and session location
#[derive(Clone)]
pub struct TelegramConfig {
    pub api_id: i32,
    pub api_hash: String,
    pub session_name: String,
}

impl TelegramConfig {
    /// Path of the persisted session file
    #[must_use]
    pub fn session_file(&self) -> PathBuf {
        PathBuf::from(format!("{}.session", self.session_name))
    }

    /// Load only the messaging credentials (used by the login tool)
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let api_id = env::var("TELEGRAM_API_ID")
            .map_err(|_| ConfigError::MissingVar("TELEGRAM_API_ID"))?;
        let api_id = api_id
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("TELEGRAM_API_ID", api_id))?;

        Ok(Self {
            api_id,
            api_hash: env::var("TELEGRAM_API_HASH")
                .map_err(|_| ConfigError::MissingVar("TELEGRAM_API_HASH"))?,
            session_name: env::var("TELEGRAM_SESSION_NAME")
                .unwrap_or_else(|_| default_session_name()),
        })
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("api_id", &self.api_id)
            .field("api_hash", &"<redacted>")
            .field("session_name", &self.session_name)
            .finish()
    }
}

/// Translation backends
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_cloud_translator_url")]
    pub cloud_base_url: String,
    /// Local engine endpoint; `None` means the engine is not installed
    #[serde(default)]
    pub offline_base_url: Option<String>,
    #[serde(default = "default_translator_timeout")]
    pub timeout_secs: u64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "tgfeed".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_api_port() -> u16 {
    8000
}

fn default_web_port() -> u16 {
    8001
}

fn default_request_timeout() -> u64 {
    120
}

fn default_session_name() -> String {
    "telegram_session".to_string()
}

fn default_cloud_translator_url() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_translator_timeout() -> u64 {
    15
}

fn default_gateway_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:8001".to_string(),
        "http://127.0.0.1:8001".to_string(),
    ]
}

/// Read and parse an optional variable, failing on unparseable values
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

impl AppSettings {
    fn from_env() -> Self {
        Self {
            name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
            env: env::var("APP_ENV")
                .ok()
                .and_then(|s| Environment::parse(&s))
                .unwrap_or_default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings::from_env(),
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("API_PORT")?.unwrap_or_else(default_api_port),
                request_timeout_secs: parse_var("API_REQUEST_TIMEOUT_SECS")?
                    .unwrap_or_else(default_request_timeout),
            },
            telegram: TelegramConfig::from_env()?,
            translation: TranslationConfig {
                cloud_base_url: env::var("CLOUD_TRANSLATOR_URL")
                    .unwrap_or_else(|_| default_cloud_translator_url()),
                offline_base_url: env::var("OFFLINE_TRANSLATOR_URL")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
                timeout_secs: parse_var("TRANSLATOR_TIMEOUT_SECS")?
                    .unwrap_or_else(default_translator_timeout),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var("RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_else(default_allowed_origins),
            },
        })
    }
}

impl WebConfig {
    /// Load presentation service configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings::from_env(),
            web: ServerConfig {
                host: env::var("WEB_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("WEB_PORT")?.unwrap_or_else(default_web_port),
                request_timeout_secs: default_request_timeout(),
            },
            gateway_base_url: env::var("GATEWAY_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| default_gateway_base_url()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
