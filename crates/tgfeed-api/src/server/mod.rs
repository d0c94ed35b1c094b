//! Server setup and session lifecycle
//!
//! The Gateway owns exactly one messaging session. It is acquired before the
//! listener binds and released on every exit path after that.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tgfeed_common::{shutdown_signal, AppConfig, AppError};
use tgfeed_core::{LocalTranslator, MessagingSession};
use tgfeed_service::ServiceContextBuilder;
use tgfeed_telegram::{TelegramClientConfig, TelegramSession};
use tgfeed_translate::{GoogleTranslator, LibreTranslateEngine, WhatlangDetector};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes skip the inbound rate limiter.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let limited = apply_rate_limit(create_router(), &config.rate_limit);
    let router = apply_middleware(
        limited.merge(health_routes()),
        &config.cors,
        config.app.env.is_production(),
        Duration::from_secs(config.api.request_timeout_secs),
    );
    router.with_state(state)
}

/// Wire the translation backends around an acquired session
pub fn create_app_state(
    config: AppConfig,
    session: Arc<dyn MessagingSession>,
) -> Result<AppState, AppError> {
    let cloud = GoogleTranslator::from_config(&config.translation).map_err(AppError::translator)?;
    let local =
        LibreTranslateEngine::from_config(&config.translation).map_err(AppError::translator)?;

    match &local {
        Some(_) => info!("Offline translation engine configured"),
        None => info!("No offline translation engine configured; offline mode disabled"),
    }

    let service_context = ServiceContextBuilder::new()
        .session(session)
        .cloud_translator(Arc::new(cloud))
        .detector(Arc::new(WhatlangDetector::new()))
        .local_translator(local.map(|engine| Arc::new(engine) as Arc<dyn LocalTranslator>))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;

    info!("Gateway listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)?;

    Ok(())
}

/// Run the complete Gateway with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.socket_addr()?;

    info!("Connecting to Telegram...");
    let session = TelegramSession::connect(&TelegramClientConfig::from(&config.telegram))
        .await
        .map_err(AppError::session)?;
    let session = Arc::new(session);

    let result = serve(config, Arc::clone(&session), addr).await;

    if let Err(e) = session.disconnect().await {
        warn!(error = %e, "Failed to release Telegram session");
    }
    result
}

async fn serve(
    config: AppConfig,
    session: Arc<TelegramSession>,
    addr: SocketAddr,
) -> Result<(), AppError> {
    session
        .ensure_authorized()
        .await
        .map_err(AppError::session)?;
    info!("Telegram session authorized");

    let state = create_app_state(config, session)?;
    run_server(create_app(state), addr).await
}
