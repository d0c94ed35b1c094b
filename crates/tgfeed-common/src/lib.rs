//! # tgfeed-common
//!
//! Shared utilities including configuration, error handling, telemetry and
//! shutdown signalling for both services.

pub mod config;
pub mod error;
pub mod shutdown;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, Environment, RateLimitConfig, ServerConfig,
    TelegramConfig, TranslationConfig, WebConfig,
};
pub use error::{AppError, AppResult};
pub use shutdown::shutdown_signal;
pub use telemetry::{
    try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
