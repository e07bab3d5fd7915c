//! Health check endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
    pub version: &'static str,
}

/// `GET /api/health` — liveness check for the front end.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: format!("{} API is running", crate::config::APP_NAME),
        version: crate::config::APP_VERSION,
    })
}
