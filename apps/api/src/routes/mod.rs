pub mod health;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/chat",
            post(handlers::handle_chat).fallback(method_not_allowed),
        )
        .with_state(state)
}

/// Non-POST requests to the chat endpoint get a plain-text 405, not the
/// JSON error envelope (and not axum's default empty 405 body).
async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
