//! Report upload endpoint — PDF in, extracted metrics out.
//!
//! `POST /api/upload-pdf` — receives a lab report as a multipart `pdf`
//! field, extracts its text layer, and runs metric extraction on it. The
//! file stays in memory; nothing is written to disk.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::extraction::detect_mime_from_bytes;
use crate::pipeline::metrics::{self, ExtractedMetrics};

/// Multipart field carrying the report.
const PDF_FIELD: &str = "pdf";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub metrics: ExtractedMetrics,
    /// Leading slice of the extracted text, for debugging layouts.
    pub extracted_text: String,
}

/// `POST /api/upload-pdf` — extract metrics from an uploaded report.
pub async fn upload_pdf(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let max_bytes = ctx.config.max_upload_bytes;
    let bytes = read_pdf_field(&mut multipart, max_bytes).await?;

    if detect_mime_from_bytes(&bytes) != "application/pdf" {
        return Err(ApiError::UnsupportedMediaType);
    }

    let size = bytes.len();
    let extractor = ctx.extractor.clone();
    // pdf-extract is CPU-bound and may panic on malformed input.
    let text = tokio::task::spawn_blocking(move || extractor.extract_text(&bytes))
        .await
        .map_err(|e| ApiError::ProcessingFailed(format!("extraction task aborted: {e}")))??;

    let metrics = metrics::extract(&text);

    tracing::info!(
        bytes = size,
        text_chars = text.chars().count(),
        metrics_found = metrics.found_count(),
        "Report processed"
    );

    Ok(Json(UploadResponse {
        success: true,
        metrics,
        extracted_text: preview(&text, ctx.config.preview_chars),
    }))
}

/// Pull the `pdf` field out of the form. Other fields are ignored.
async fn read_pdf_field(multipart: &mut Multipart, max_bytes: usize) -> Result<Vec<u8>, ApiError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(ApiError::NoFile),
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                return Err(ApiError::PayloadTooLarge {
                    limit_bytes: max_bytes,
                })
            }
            Err(e) => return Err(ApiError::BadRequest(e.body_text())),
        };

        if field.name() != Some(PDF_FIELD) {
            continue;
        }

        if let Some(content_type) = field.content_type() {
            if content_type != "application/pdf" {
                tracing::debug!(content_type, "Rejected non-PDF upload");
                return Err(ApiError::UnsupportedMediaType);
            }
        }

        let bytes = field.bytes().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge {
                    limit_bytes: max_bytes,
                }
            } else {
                ApiError::BadRequest(format!("Failed to read file data: {}", e.body_text()))
            }
        })?;

        if bytes.len() > max_bytes {
            return Err(ApiError::PayloadTooLarge {
                limit_bytes: max_bytes,
            });
        }

        return Ok(bytes.to_vec());
    }
}

/// First `max_chars` characters, never splitting a code point.
fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
