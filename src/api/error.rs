//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::pipeline::extraction::ExtractionError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No PDF file uploaded")]
    NoFile,
    #[error("Only PDF files are allowed")]
    UnsupportedMediaType,
    #[error("File exceeds {limit_bytes} byte limit")]
    PayloadTooLarge { limit_bytes: usize },
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Failed to process PDF: {0}")]
    ProcessingFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::NoFile => (
                StatusCode::BAD_REQUEST,
                "NO_FILE",
                "No PDF file uploaded".to_string(),
            ),
            ApiError::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                "Only PDF files are allowed".to_string(),
            ),
            ApiError::PayloadTooLarge { limit_bytes } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                format!(
                    "File size exceeds {}MB limit",
                    limit_bytes.div_ceil(1024 * 1024)
                ),
            ),
            ApiError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                detail.clone(),
            ),
            ApiError::ProcessingFailed(detail) => {
                tracing::warn!(detail, "PDF processing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PDF_PROCESSING_FAILED",
                    format!("Failed to process PDF: {detail}"),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedFormat(_) => ApiError::UnsupportedMediaType,
            ExtractionError::PdfParsing(detail) => ApiError::ProcessingFailed(detail),
        }
    }
}
