//! Axum route handler for the chat relay.
//!
//! Each invocation is one linear pipeline: config check → body parse →
//! validation → inbound log → upstream call → result mapping → outbound log.
//! Nothing is kept between invocations.

use axum::{extract::State, http::HeaderMap, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::chat::sanitize::sanitize_reply;
use crate::errors::AppError;
use crate::llm_client::ChatCall;
use crate::state::AppState;

/// Maximum allowed message length in characters.
const MAX_MESSAGE_CHARS: usize = 1000;

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Ambient request metadata, used only for logging.
struct RequestMeta {
    timestamp: DateTime<Utc>,
    ip: String,
    user_agent: String,
}

impl RequestMeta {
    fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            timestamp: Utc::now(),
            ip: header_value(headers, "x-real-ip")
                .or_else(|| header_value(headers, "x-forwarded-for"))
                .unwrap_or_else(|| "unknown".to_string()),
            user_agent: header_value(headers, "user-agent")
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// POST /api/v1/chat
///
/// Relays one user message to the Anthropic Messages API under the deployment's
/// persona prompt and returns `{ "reply": <text> }`.
///
/// The body is taken raw and parsed by hand: a typed `Json` extractor would
/// collapse "not JSON at all" and "message has the wrong type" into one
/// rejection, and those are distinct errors on this endpoint.
pub async fn handle_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<ChatReply>, AppError> {
    // The key is re-read every invocation; checked before the body is touched.
    let api_key = state.config.api_key().ok_or_else(|| {
        AppError::Config("Missing ANTHROPIC_API_KEY in environment".to_string())
    })?;

    let payload: Value = serde_json::from_str(&body).map_err(|_| AppError::InvalidJson)?;
    let message = validate_message(&payload)?;

    let meta = RequestMeta::from_headers(&headers);
    info!(
        timestamp = %meta.timestamp.to_rfc3339(),
        ip = %meta.ip,
        user_agent = %meta.user_agent,
        user_message = %message,
        "chat request"
    );

    let model = state.config.model();
    let response = state
        .llm
        .send(
            &api_key,
            ChatCall {
                model: &model,
                system: state.policy.system_prompt,
                message,
            },
        )
        .await?;

    let text = response.text().ok_or(AppError::NoReply)?;
    let reply = if state.policy.sanitize_reply {
        sanitize_reply(text)
    } else {
        text.to_string()
    };

    info!(
        timestamp = %meta.timestamp.to_rfc3339(),
        ip = %meta.ip,
        user_agent = %meta.user_agent,
        reply = %reply,
        "chat reply"
    );

    Ok(Json(ChatReply { reply }))
}

/// The `message` field must exist, be a string, be non-empty, and hold at
/// most [`MAX_MESSAGE_CHARS`] characters (counted as chars, not bytes).
fn validate_message(payload: &Value) -> Result<&str, AppError> {
    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .ok_or(AppError::InvalidMessage)?;

    if message.is_empty() || message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::InvalidMessage);
    }

    Ok(message)
}
