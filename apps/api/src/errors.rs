use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pipeline::PipelineError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unreadable document: {0}")]
    DocumentUnreadable(String),

    #[error("Malformed model response: {0}")]
    MalformedModelResponse(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::DocumentRead(e) => AppError::DocumentUnreadable(e.reason),
            e @ PipelineError::MalformedResponse { .. } => {
                AppError::MalformedModelResponse(e.to_string())
            }
            PipelineError::Upstream(e) => AppError::Upstream(e.to_string()),
            PipelineError::Template(e) => AppError::Internal(e.into()),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::Validation(format!("invalid multipart body: {}", err.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::DocumentUnreadable(msg) => {
                tracing::warn!("Document unreadable: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "DOCUMENT_UNREADABLE",
                    "The uploaded file could not be read as a PDF".to_string(),
                )
            }
            AppError::MalformedModelResponse(msg) => {
                tracing::error!("Malformed model response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_MODEL_RESPONSE",
                    "The model response could not be interpreted".to_string(),
                )
            }
            AppError::Upstream(msg) => {
                tracing::error!("LLM upstream error: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "UPSTREAM_UNAVAILABLE",
                    "The language model service is unavailable".to_string(),
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
