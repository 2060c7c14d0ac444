use anyhow::{Context, Result};

use crate::llm_client::{ANTHROPIC_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables at startup.
///
/// The Anthropic API key is intentionally NOT part of this struct: the chat
/// handler re-reads it on every invocation through [`ConfigProvider`], so a
/// deployment that gains or loses the key changes behavior without a restart.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_base_url: String,
    pub sanitize_replies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_base_url: std::env::var("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|_| ANTHROPIC_BASE_URL.to_string()),
            sanitize_replies: std::env::var("SANITIZE_REPLIES")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

/// Per-invocation configuration lookups.
///
/// Handlers never touch `std::env` directly; they go through this trait so
/// tests can substitute fixed values without mutating process environment
/// state.
pub trait ConfigProvider: Send + Sync {
    /// The Anthropic API key, or `None` when the deployment is missing it.
    fn api_key(&self) -> Option<String>;

    /// Model identifier for upstream calls.
    fn model(&self) -> String;
}

/// Reads configuration from the process environment on every call.
pub struct EnvConfig;

impl ConfigProvider for EnvConfig {
    fn api_key(&self) -> Option<String> {
        std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
    }

    fn model(&self) -> String {
        std::env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
    }
}
