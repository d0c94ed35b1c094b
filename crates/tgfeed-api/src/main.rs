//! Gateway Service entry point
//!
//! Run with:
//! ```bash
//! cargo run -p tgfeed-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`). The
//! session file must already be authorized with `tgfeed-login`.

use tgfeed_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        session = %config.telegram.session_file().display(),
        "Starting Telegram Gateway Service"
    );

    if let Err(e) = tgfeed_api::run(config).await {
        error!(code = e.error_code(), error = %e, "Gateway failed");
        std::process::exit(1);
    }
}
