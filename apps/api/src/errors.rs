use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::jobs::JobDescriptionError;
use crate::llm_client::LlmError;
use crate::normalize::NormalizeError;
use crate::resume::PdfError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    JobDescription(#[from] JobDescriptionError),

    #[error("Model output error: {0}")]
    ModelOutput(#[from] NormalizeError),

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::JobDescription(_) | AppError::Llm(_) => StatusCode::BAD_GATEWAY,
            AppError::ModelOutput(_) | AppError::Pdf(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::JobDescription(e) => {
                tracing::error!("{e}");
                ("FETCH_ERROR", e.to_string())
            }
            AppError::ModelOutput(e) => {
                tracing::error!("Model output rejected: {e}");
                ("MODEL_OUTPUT_ERROR", e.to_string())
            }
            AppError::Pdf(e) => {
                tracing::warn!("Resume PDF rejected: {e}");
                ("PDF_ERROR", e.to_string())
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                ("LLM_ERROR", "An AI processing error occurred".to_string())
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
