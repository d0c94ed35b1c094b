//! Gateway API integration tests
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use integration_tests::{
    assert_json, assert_status, fixtures::*, test_config, Backends, InstalledEngine,
    ScriptedSession, TaggingTranslator, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tgfeed_common::RateLimitConfig;
use tgfeed_core::{DomainError, MessageQuery};

fn session_failing_with(make: fn() -> DomainError) -> Backends {
    Backends {
        session: Arc::new(ScriptedSession::new(sample_dialogs(), sample_history()).failing(make)),
        ..Backends::default()
    }
}

fn with_engine(codes: &[&str]) -> Backends {
    Backends {
        local: Some(Arc::new(InstalledEngine::with_codes(codes))),
        ..Backends::default()
    }
}

// ============================================================================
// Service info
// ============================================================================

#[tokio::test]
async fn test_root_banner() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["message"], "Telegram Channel API");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn test_health_reports_connection() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({ "status": "healthy", "connected": true }));
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Channels
// ============================================================================

#[tokio::test]
async fn test_list_channels_only_channels_in_order() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/channels").await.unwrap();
    let channels: Vec<ChannelBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].id, NEWS_CHANNEL_ID);
    assert_eq!(channels[0].title, "World News");
    assert_eq!(channels[0].username.as_deref(), Some(NEWS_USERNAME));
    assert_eq!(channels[0].participants_count, Some(1200));
    assert_eq!(channels[1].title, "Private Feed");
    assert!(channels[1].username.is_none());
}

#[tokio::test]
async fn test_list_channels_backend_failure() {
    let server = TestServer::with_backends(session_failing_with(|| {
        DomainError::backend("connection reset")
    }))
    .await
    .unwrap();

    let response = server.get("/channels").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error.code, "BACKEND_ERROR");
    assert_eq!(body.error.message, "Error listing channels: connection reset");
}

// ============================================================================
// Messages
// ============================================================================

#[tokio::test]
async fn test_messages_untranslated() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get(&format!("/channels/{NEWS_CHANNEL_ID}/messages?translate=false"))
        .await
        .unwrap();
    let messages: Vec<MessageBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<i32> = messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![30, 20, 10]);

    assert_eq!(messages[0].text, "Привет, мир");
    assert_eq!(messages[0].sender_id, Some(NEWS_CHANNEL_ID));
    assert_eq!(messages[0].sender_username.as_deref(), Some(NEWS_USERNAME));
    assert_eq!(messages[0].views, Some(900));
    assert_eq!(messages[0].forwards, Some(4));
    assert_eq!(
        messages[0].reactions,
        Some(vec![
            ReactionBody {
                emoji: "👍".to_string(),
                count: 5
            },
            ReactionBody {
                emoji: "🎨77".to_string(),
                count: 2
            },
        ])
    );
    assert!(messages[0].date.starts_with("2024-05-01T12:30:00"));

    assert_eq!(messages[1].text, "[Media: MessageMediaPhoto]");
    assert!(messages[1].reactions.is_none());
    assert!(messages[1].forwards.is_none());

    assert_eq!(messages[2].text, "Good morning");
    assert_eq!(messages[2].sender_id, Some(42));
    assert!(messages[2].sender_username.is_none());
}

#[tokio::test]
async fn test_messages_translated_by_default() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get(&format!("/channels/{NEWS_CHANNEL_ID}/messages"))
        .await
        .unwrap();
    let messages: Vec<MessageBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(messages[0].text, "[en] Привет, мир");
    assert_eq!(messages[1].text, "[Media: MessageMediaPhoto]");
    assert_eq!(messages[2].text, "Good morning");
}

#[tokio::test]
async fn test_translator_failure_keeps_original_text() {
    let server = TestServer::with_backends(Backends {
        cloud: TaggingTranslator { fail: true },
        ..Backends::default()
    })
    .await
    .unwrap();

    let response = server
        .get(&format!("/channels/{NEWS_CHANNEL_ID}/messages"))
        .await
        .unwrap();
    let messages: Vec<MessageBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(messages[0].text, "Привет, мир");
}

#[tokio::test]
async fn test_marked_channel_id_resolves() {
    let server = TestServer::start().await.unwrap();
    let marked = -(1_000_000_000_000 + NEWS_CHANNEL_ID);
    let response = server
        .get(&format!("/channels/{marked}/messages?translate=false"))
        .await
        .unwrap();
    let messages: Vec<MessageBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(messages.len(), 3);
}

#[tokio::test]
async fn test_messages_by_username() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get(&format!("/channels/by-username/{NEWS_USERNAME}/messages?limit=2&translate=false"))
        .await
        .unwrap();
    let messages: Vec<MessageBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(messages.iter().map(|m| m.id).collect::<Vec<_>>(), vec![30, 20]);
}

#[tokio::test]
async fn test_pagination_forwarded_unchanged() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get(&format!(
            "/channels/{NEWS_CHANNEL_ID}/messages?limit=2&offset_id=50&max_id=90&translate=false"
        ))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/channels/{NEWS_CHANNEL_ID}/messages?translate=false"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        server.session.queries(),
        vec![
            MessageQuery {
                limit: 2,
                offset_id: Some(50),
                min_id: None,
                max_id: Some(90),
            },
            MessageQuery::latest(50),
        ]
    );
}

#[tokio::test]
async fn test_unknown_channel_is_404() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/channels/999/messages").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body.error.code, "UNKNOWN_CHANNEL");
    assert!(body.error.message.starts_with("Channel not found: "));

    let response = server
        .get("/channels/by-username/nobody_here/messages")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_out_of_range_channel_id_is_404() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get(&format!("/channels/{}/messages", i64::MIN))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_CHANNEL");
}

#[tokio::test]
async fn test_flood_wait_is_429_with_wait() {
    let server = TestServer::with_backends(session_failing_with(|| DomainError::FloodWait {
        seconds: 42,
    }))
    .await
    .unwrap();

    let response = server
        .get(&format!("/channels/{NEWS_CHANNEL_ID}/messages"))
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok()),
        Some("42")
    );
    let body: ErrorEnvelope = assert_json(response, StatusCode::TOO_MANY_REQUESTS)
        .await
        .unwrap();
    assert_eq!(body.error.code, "RATE_LIMITED");
    assert_eq!(body.error.message, "Rate limited. Wait 42 seconds");
    assert_eq!(body.error.details, Some(json!({ "retry_after": 42 })));
}

#[tokio::test]
async fn test_retrieval_backend_failure_is_500() {
    let server = TestServer::with_backends(session_failing_with(|| {
        DomainError::backend("CHANNEL_PRIVATE")
    }))
    .await
    .unwrap();

    let response = server
        .get(&format!("/channels/{NEWS_CHANNEL_ID}/messages"))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error.message, "Error retrieving messages: CHANNEL_PRIVATE");
}

#[tokio::test]
async fn test_invalid_channel_id_path() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/channels/not-a-number/messages").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_limit_bounds() {
    let server = TestServer::start().await.unwrap();

    for limit in ["0", "1001"] {
        let response = server
            .get(&format!("/channels/{NEWS_CHANNEL_ID}/messages?limit={limit}"))
            .await
            .unwrap();
        let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.error.code, "VALIDATION_ERROR");
    }

    let response = server
        .get(&format!("/channels/{NEWS_CHANNEL_ID}/messages?limit=ten"))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_QUERY_PARAMETER");

    let response = server
        .get(&format!("/channels/{NEWS_CHANNEL_ID}/messages?limit=1000&translate=false"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Translation
// ============================================================================

#[tokio::test]
async fn test_translate_online_defaults() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/translate", &TranslateBody::online("Доброе утро"))
        .await
        .unwrap();
    let body: TranslateResult = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.translated_text, "[en] Доброе утро");
    assert_eq!(body.source_lang, "auto");
    assert_eq!(body.target_lang, "en");
    assert_eq!(body.mode, "online");
}

#[tokio::test]
async fn test_translate_online_failure_is_500() {
    let server = TestServer::with_backends(Backends {
        cloud: TaggingTranslator { fail: true },
        ..Backends::default()
    })
    .await
    .unwrap();

    let response = server
        .post("/translate", &TranslateBody::online("hello"))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert!(body.error.message.starts_with("Translation failed: "));
}

#[tokio::test]
async fn test_translate_rejects_blank_and_oversized_text() {
    let server = TestServer::start().await.unwrap();

    let response = server.post("/translate", &TranslateBody::online("   ")).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    let response = server
        .post("/translate", &TranslateBody::online(&"я".repeat(5001)))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post("/translate", &TranslateBody::online(&"я".repeat(5000)))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_translate_malformed_body() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/translate", &json!({ "text": "hi", "mode": "telepathy" }))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn test_offline_without_engine_is_500() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/translate", &TranslateBody::offline("hello", "en", "ru"))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error.code, "TRANSLATOR_NOT_INSTALLED");
}

#[tokio::test]
async fn test_offline_requires_explicit_source() {
    let server = TestServer::with_backends(with_engine(&["en", "ru"])).await.unwrap();
    let response = server
        .post("/translate", &TranslateBody::offline("hello", "auto", "ru"))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_offline_uninstalled_language_lists_installed() {
    let server = TestServer::with_backends(with_engine(&["en", "ru"])).await.unwrap();
    let response = server
        .post("/translate", &TranslateBody::offline("hallo", "de", "en"))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "LANGUAGE_NOT_INSTALLED");
    assert_eq!(
        body.error.details,
        Some(json!({ "requested": "de", "installed": ["en", "ru"] }))
    );
}

#[tokio::test]
async fn test_offline_translation() {
    let server = TestServer::with_backends(with_engine(&["en", "uk"])).await.unwrap();
    let response = server
        .post("/translate", &TranslateBody::offline("Добрий ранок", "uk", "en"))
        .await
        .unwrap();
    let body: TranslateResult = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.translated_text, "uk->en: Добрий ранок");
    assert_eq!(body.mode, "offline");
}

// ============================================================================
// Inbound rate limiting
// ============================================================================

#[tokio::test]
async fn test_rate_limit_spares_health() {
    let mut config = test_config();
    config.rate_limit = RateLimitConfig {
        requests_per_second: 1,
        burst: 2,
    };
    let server = TestServer::start_with(Backends::default(), config).await.unwrap();

    let mut statuses = Vec::new();
    for _ in 0..4 {
        statuses.push(server.get("/channels").await.unwrap().status());
    }
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
