use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Unauthenticated entry is deliberately NOT a variant: it is handled by a
/// redirect to the sign-in page, never surfaced as an error body. A CV-store
/// load failure is likewise not here — the load phase recovers it into an
/// inline page message instead of failing the request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Enhancement error: {0}")]
    Enhancement(String),

    #[error("Identity error: {0}")]
    Identity(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Enhancement(msg) => {
                tracing::error!("Error during enhancement of CV: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ENHANCEMENT_FAILED",
                    "Failed to enhance CV".to_string(),
                )
            }
            AppError::Identity(msg) => {
                tracing::error!("Identity resolution error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "IDENTITY_ERROR",
                    "An authentication error occurred".to_string(),
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
