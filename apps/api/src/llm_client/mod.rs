/// LLM Client — the single point of entry for all Claude API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All LLM interactions MUST go through this module.
///
/// Each chat invocation makes exactly one attempt: there is no retry loop and
/// no client-side timeout. The execution platform owns cancellation, and a
/// failed call surfaces immediately as an error response.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Default base URL for the Anthropic API. Overridable via `ANTHROPIC_BASE_URL`
/// so tests and local proxies can stand in for the real service.
pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Fallback model when `ANTHROPIC_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1000;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One chat call: a model, a fixed system prompt, and a single user message.
#[derive(Debug, Clone, Copy)]
pub struct ChatCall<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    pub block_type: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl MessagesResponse {
    /// Text of the first content block, when the response carries one.
    pub fn text(&self) -> Option<&str> {
        self.content.first().and_then(|block| block.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Thin wrapper over the Anthropic Messages API.
///
/// Holds no credentials: the API key is supplied per call because it is read
/// from the environment on every invocation.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    messages_url: String,
}

impl LlmClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            messages_url: format!("{}/v1/messages", base_url.trim_end_matches('/')),
        }
    }

    /// Makes a single call to the Messages API.
    ///
    /// The response body is read as text first and then JSON-parsed, with an
    /// empty body treated as an empty object. The provider does not always
    /// return JSON on error paths, and an `error.message` is only extracted
    /// when the body actually has that shape.
    pub async fn send(&self, api_key: &str, call: ChatCall<'_>) -> Result<MessagesResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: call.model,
            max_tokens: MAX_TOKENS,
            system: call.system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: call.message,
            }],
        };

        let response = self
            .client
            .post(&self.messages_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        let data: Value = if raw.is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_str(&raw)?
        };

        if !status.is_success() {
            let message = serde_json::from_value::<AnthropicError>(data)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| "Anthropic API request failed".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: MessagesResponse = serde_json::from_value(data)?;

        if let Some(usage) = &parsed.usage {
            debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "LLM call succeeded"
            );
        }

        Ok(parsed)
    }
}
