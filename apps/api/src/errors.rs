use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every error body is `{"error": <message>}`; only the translation
/// diagnostic additionally carries the raw provider payload.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0} is not configured")]
    Unconfigured(&'static str),

    #[error("{service} error: {status}")]
    Upstream { service: &'static str, status: u16 },

    #[error("Provider reply was not valid JSON")]
    Translation { raw: serde_json::Value },

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Unconfigured(what) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": format!("{what} is not configured") }),
            ),
            AppError::Upstream { service, status } => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": format!("{service} error: {status}") }),
            ),
            // Intentionally echoes the provider payload so a broken reply
            // can be diagnosed from the client side.
            AppError::Translation { raw } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Provider reply was not valid JSON",
                    "provider_response": raw,
                }),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal server error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
