//! Presentation Service entry point
//!
//! Run with:
//! ```bash
//! cargo run -p tgfeed-web
//! ```

use tgfeed_common::{try_init_tracing_with_config, TracingConfig, WebConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match WebConfig::from_env() {
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
        port = config.web.port,
        gateway = %config.gateway_base_url,
        "Starting Presentation Service"
    );

    if let Err(e) = tgfeed_web::run(config).await {
        error!(code = e.error_code(), error = %e, "Presentation Service failed");
        std::process::exit(1);
    }
}
