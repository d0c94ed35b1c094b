//! Middleware stack for the Gateway
//!
//! Request ids, request tracing, timeouts, CORS and inbound rate limiting.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use tgfeed_common::{CorsConfig, RateLimitConfig};
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Interval between quota replenishments for a requests-per-second rate
fn replenish_interval_ms(requests_per_second: u32) -> u64 {
    (1000 / u64::from(requests_per_second.max(1))).max(1)
}

/// Limit inbound requests globally (not per client)
pub fn apply_rate_limit(router: Router<AppState>, config: &RateLimitConfig) -> Router<AppState> {
    let Some(governor_conf) = GovernorConfigBuilder::default()
        .per_millisecond(replenish_interval_ms(config.requests_per_second))
        .burst_size(config.burst.max(1))
        .key_extractor(GlobalKeyExtractor)
        .finish()
    else {
        warn!("Rate limiter configuration rejected; inbound rate limiting disabled");
        return router;
    };

    router.layer(GovernorLayer {
        config: Arc::new(governor_conf),
    })
}

/// Apply the request id, trace, timeout and CORS layers
///
/// Order on the way in: RequestID -> Trace -> Timeout -> CORS -> Handler.
pub fn apply_middleware(
    router: Router<AppState>,
    cors_config: &CorsConfig,
    is_production: bool,
    request_timeout: Duration,
) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            // Request ID
            .layer(SetRequestIdLayer::new(
                header::HeaderName::from_static(REQUEST_ID_HEADER),
                MakeRequestUuid,
            ))
            .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            // Tracing
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get(REQUEST_ID_HEADER)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("unknown");

                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    })
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            // Returns 503 Service Unavailable on timeout
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                request_timeout,
            ))
            .layer(create_cors_layer(cors_config, is_production)),
    )
}

/// Create CORS layer from configuration
///
/// Configured origins are always honoured. With none configured, development
/// allows any origin and production blocks cross-origin browsers.
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            header::RETRY_AFTER,
        ]);

    if !config.allowed_origins.is_empty() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                origin.parse::<HeaderValue>().ok().or_else(|| {
                    warn!(origin = %origin, "Invalid CORS origin");
                    None
                })
            })
            .collect();

        info!("CORS: Allowing {} configured origins", origins.len());
        base_layer.allow_origin(AllowOrigin::list(origins))
    } else if is_production {
        warn!(
            "CORS: No allowed origins configured in production mode. \
             Requests from browsers will be blocked."
        );
        base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
    } else {
        warn!("CORS: Allowing any origin (development mode)");
        base_layer.allow_origin(Any)
    }
}
