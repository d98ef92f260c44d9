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
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Caller's shared secret is missing or wrong.
    #[error("Invalid API key")]
    Unauthorized,

    /// The server itself has no shared secret configured — distinct from
    /// `Unauthorized` so a misconfigured deployment is not mistaken for a
    /// bad caller.
    #[error("API key not configured")]
    ApiKeyNotConfigured,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Invalid API key".to_string(),
            ),
            AppError::ApiKeyNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "API_KEY_NOT_CONFIGURED",
                "API key not configured".to_string(),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                // The causal text travels to the caller; there is no retry
                // or partial-result fallback to fall through to.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    format!("Completion request failed: {e}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
