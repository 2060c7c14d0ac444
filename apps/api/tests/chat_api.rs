//! Integration tests for the chat relay endpoint.
//!
//! The upstream provider is mocked with wiremock so tests are hermetic, and
//! configuration comes from a fixed-value provider so no test mutates real
//! process environment state.

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use advocate_api::chat::prompts;
use advocate_api::config::ConfigProvider;
use advocate_api::llm_client::LlmClient;
use advocate_api::routes::build_router;
use advocate_api::state::{AppState, ChatPolicy};

const TEST_API_KEY: &str = "test-key";
const TEST_MODEL: &str = "claude-test";

/// Fixed-value configuration so tests never read or write process env vars.
struct FixedConfig {
    api_key: Option<&'static str>,
}

impl ConfigProvider for FixedConfig {
    fn api_key(&self) -> Option<String> {
        self.api_key.map(str::to_string)
    }

    fn model(&self) -> String {
        TEST_MODEL.to_string()
    }
}

fn test_app(base_url: &str, api_key: Option<&'static str>, sanitize: bool) -> Router {
    let state = AppState {
        llm: LlmClient::new(base_url),
        config: Arc::new(FixedConfig { api_key }),
        policy: ChatPolicy {
            system_prompt: prompts::RESUME_ASSISTANT_SYSTEM,
            sanitize_reply: sanitize,
        },
    };
    build_router(state)
}

/// An app whose upstream calls can never succeed; used for tests that must
/// fail before the upstream call is made.
fn app_without_upstream(api_key: Option<&'static str>) -> Router {
    test_app("http://127.0.0.1:1", api_key, false)
}

async fn post_chat(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/chat")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Mounts a successful Messages API response on the mock server.
async fn mount_success(server: &MockServer, reply_text: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{ "type": "text", "text": reply_text }],
            "usage": { "input_tokens": 12, "output_tokens": 34 }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn non_post_methods_get_plain_405() {
    for http_method in ["GET", "PUT", "DELETE", "PATCH"] {
        let response = app_without_upstream(Some(TEST_API_KEY))
            .oneshot(
                Request::builder()
                    .method(http_method)
                    .uri("/api/v1/chat")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{http_method} should be rejected"
        );
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));
        assert!(!is_json, "405 must not carry the JSON error envelope");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Method not allowed");
    }
}

#[tokio::test]
async fn missing_api_key_is_500_before_body_parsing() {
    // The body here is invalid JSON; the config check must win.
    let (status, body) = post_chat(app_without_upstream(None), "not json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["error"].as_str().unwrap().contains("ANTHROPIC_API_KEY"),
        "error should name the missing variable: {body}"
    );
}

#[tokio::test]
async fn malformed_json_body_is_400() {
    let (status, body) = post_chat(app_without_upstream(Some(TEST_API_KEY)), "{oops").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON body");
}

#[tokio::test]
async fn invalid_messages_are_400() {
    let too_long = json!({ "message": "a".repeat(1001) }).to_string();
    let cases = [
        r#"{}"#.to_string(),
        r#"{"message": ""}"#.to_string(),
        r#"{"message": 42}"#.to_string(),
        r#"{"message": null}"#.to_string(),
        too_long,
    ];

    for case in cases {
        let (status, body) = post_chat(app_without_upstream(Some(TEST_API_KEY)), &case).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "case: {case:.60}");
        assert_eq!(body["error"], "Invalid message");
    }
}

#[tokio::test]
async fn message_at_the_1000_char_limit_is_accepted() {
    let server = MockServer::start().await;
    mount_success(&server, "ok").await;

    let body = json!({ "message": "a".repeat(1000) }).to_string();
    let (status, body) = post_chat(test_app(&server.uri(), Some(TEST_API_KEY), false), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "ok");
}

#[tokio::test]
async fn successful_relay_returns_reply() {
    let server = MockServer::start().await;
    mount_success(&server, "Hello!").await;

    let (status, body) = post_chat(
        test_app(&server.uri(), Some(TEST_API_KEY), false),
        r#"{"message": "Why should I interview Brittany?"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "reply": "Hello!" }));
}

#[tokio::test]
async fn outbound_call_carries_protocol_headers_and_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", TEST_API_KEY))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": TEST_MODEL,
            "max_tokens": 1000,
            "messages": [{ "role": "user", "content": "hi" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{ "type": "text", "text": "hey" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, _) = post_chat(
        test_app(&server.uri(), Some(TEST_API_KEY), false),
        r#"{"message": "hi"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn sanitizing_variant_strips_markup_from_reply() {
    let server = MockServer::start().await;
    mount_success(&server, "**Brittany**  led\n\n# 40+ rollouts").await;

    let (status, body) = post_chat(
        test_app(&server.uri(), Some(TEST_API_KEY), true),
        r#"{"message": "What did she lead?"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Brittany led 40+ rollouts");
}

#[tokio::test]
async fn upstream_rejection_status_and_message_pass_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "type": "rate_limit_error", "message": "rate limited" }
        })))
        .mount(&server)
        .await;

    let (status, body) = post_chat(
        test_app(&server.uri(), Some(TEST_API_KEY), false),
        r#"{"message": "hi"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "rate limited");
}

#[tokio::test]
async fn upstream_rejection_with_empty_body_gets_fallback_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (status, body) = post_chat(
        test_app(&server.uri(), Some(TEST_API_KEY), false),
        r#"{"message": "hi"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Anthropic API request failed");
}

#[tokio::test]
async fn empty_content_array_is_500_no_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": [] })))
        .mount(&server)
        .await;

    let (status, body) = post_chat(
        test_app(&server.uri(), Some(TEST_API_KEY), false),
        r#"{"message": "hi"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "No response from AI");
}

#[tokio::test]
async fn unreachable_upstream_is_500_transport_error() {
    // Nothing listens on port 1; the connection fails outright.
    let (status, body) = post_chat(
        test_app("http://127.0.0.1:1", Some(TEST_API_KEY), false),
        r#"{"message": "hi"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to reach AI service");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let response = app_without_upstream(Some(TEST_API_KEY))
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "advocate-api");
}
