use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use advocate_api::chat::prompts;
use advocate_api::config::{Config, EnvConfig};
use advocate_api::llm_client::LlmClient;
use advocate_api::routes::build_router;
use advocate_api::state::{AppState, ChatPolicy};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Advocate API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(&config.anthropic_base_url);
    info!("LLM client initialized (base URL: {})", config.anthropic_base_url);

    // Build app state. The API key is looked up per request through
    // EnvConfig, not captured here.
    let state = AppState {
        llm,
        config: Arc::new(EnvConfig),
        policy: ChatPolicy {
            system_prompt: prompts::RESUME_ASSISTANT_SYSTEM,
            sanitize_reply: config.sanitize_replies,
        },
    };
    info!("Reply sanitization: {}", config.sanitize_replies);

    // Build router. The widget is served from the resume site's own origin,
    // so cross-origin POSTs are expected.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
