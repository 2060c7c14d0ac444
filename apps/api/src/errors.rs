use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant except `Upstream` maps to a fixed status code; `Upstream`
/// passes the provider's status code through to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(String),

    #[error("Invalid JSON body")]
    InvalidJson,

    #[error("Invalid message")]
    InvalidMessage,

    #[error("Upstream rejected request (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("No response from AI")]
    NoReply,

    #[error("Failed to reach AI service")]
    Unreachable,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::InvalidJson | AppError::InvalidMessage => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Upstream { status, message } => {
                tracing::warn!("Upstream rejection (status {status}): {message}");
                (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    message.clone(),
                )
            }
            AppError::NoReply => {
                tracing::error!("Upstream response carried no usable content");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Unreachable => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status, message } => AppError::Upstream { status, message },
            LlmError::Http(e) => {
                tracing::error!("Upstream transport failure: {e}");
                AppError::Unreachable
            }
            LlmError::Parse(e) => {
                tracing::error!("Upstream returned an undecodable body: {e}");
                AppError::Unreachable
            }
        }
    }
}
