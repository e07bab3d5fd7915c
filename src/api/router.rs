//! Report API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! API routes are nested under `/api/`; when a static directory is
//! configured, every other path is served from it.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Headroom above the file limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the report API router.
pub fn api_router(ctx: ApiContext) -> Router {
    let body_limit = ctx
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/upload-pdf", post(endpoints::documents::upload_pdf))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(ctx.clone());

    let mut router = Router::new().nest("/api", api);

    if let Some(dir) = &ctx.config.static_dir {
        tracing::info!(dir = %dir.display(), "Serving static files");
        router = router.fallback_service(ServeDir::new(dir));
    }

    // The front end may be opened from another origin (or from disk).
    router.layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::pipeline::extraction::{ExtractionError, PdfExtractor};

    const BOUNDARY: &str = "glucovista-test-boundary";

    /// Returns canned text regardless of input.
    struct CannedExtractor(&'static str);

    impl PdfExtractor for CannedExtractor {
        fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingExtractor;

    impl PdfExtractor for FailingExtractor {
        fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
            Err(ExtractionError::PdfParsing("invalid xref table".into()))
        }
    }

    struct PanickingExtractor;

    impl PdfExtractor for PanickingExtractor {
        fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
            panic!("malformed font dictionary");
        }
    }

    fn router_with(extractor: impl PdfExtractor + Send + Sync + 'static) -> Router {
        router_with_config(ServerConfig::default(), extractor)
    }

    fn router_with_config(
        config: ServerConfig,
        extractor: impl PdfExtractor + Send + Sync + 'static,
    ) -> Router {
        api_router(ApiContext::with_extractor(config, Arc::new(extractor)))
    }

    fn multipart_request(field: &str, content_type: &str, data: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"report.pdf\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/upload-pdf")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = router_with(CannedExtractor(""));
        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["message"], "GlucoVista API is running");
        assert_eq!(json["version"], crate::config::APP_VERSION);
    }

    #[tokio::test]
    async fn upload_returns_extracted_metrics() {
        let app = router_with(CannedExtractor(
            "Fasting Glucose: 135 mg/dL\nHbA1c 6.8 %\nBP 140/95 mmHg\nAge: 58 years Male",
        ));
        let response = app
            .oneshot(multipart_request("pdf", "application/pdf", b"%PDF-1.4 test"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["metrics"]["glucose"], 135.0);
        assert_eq!(json["metrics"]["hba1c"], 6.8);
        assert_eq!(json["metrics"]["bpSystolic"], 140);
        assert_eq!(json["metrics"]["bpDiastolic"], 95);
        assert_eq!(json["metrics"]["age"], 58);
        assert_eq!(json["metrics"]["gender"], "male");
        assert!(json["metrics"]["height"].is_null());
        assert!(json["extractedText"]
            .as_str()
            .unwrap()
            .starts_with("Fasting Glucose"));
    }

    #[tokio::test]
    async fn upload_preview_is_truncated() {
        let config = ServerConfig {
            preview_chars: 7,
            ..Default::default()
        };
        let app = router_with_config(config, CannedExtractor("Glucose 120 mg/dL"));
        let response = app
            .oneshot(multipart_request("pdf", "application/pdf", b"%PDF-1.4"))
            .await
            .unwrap();
        let json = json_body(response).await;
        assert_eq!(json["extractedText"], "Glucose");
    }

    #[tokio::test]
    async fn upload_with_no_metrics_still_succeeds() {
        let app = router_with(CannedExtractor("Invoice #42"));
        let response = app
            .oneshot(multipart_request("pdf", "application/pdf", b"%PDF-1.4"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert!(json["metrics"]["glucose"].is_null());
        assert!(json["metrics"]["gender"].is_null());
    }

    #[tokio::test]
    async fn upload_without_pdf_field_is_400() {
        let app = router_with(CannedExtractor(""));
        let response = app
            .oneshot(multipart_request("document", "application/pdf", b"%PDF-1.4"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "NO_FILE");
    }

    #[tokio::test]
    async fn upload_with_wrong_content_type_is_415() {
        let app = router_with(CannedExtractor(""));
        let response = app
            .oneshot(multipart_request("pdf", "image/png", b"%PDF-1.4"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn upload_with_non_pdf_bytes_is_415() {
        let app = router_with(CannedExtractor(""));
        let response = app
            .oneshot(multipart_request("pdf", "application/pdf", b"GIF89a...."))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let json = json_body(response).await;
        assert_eq!(json["error"]["message"], "Only PDF files are allowed");
    }

    #[tokio::test]
    async fn upload_over_limit_is_413() {
        let config = ServerConfig {
            max_upload_bytes: 16,
            ..Default::default()
        };
        let app = router_with_config(config, CannedExtractor(""));
        let mut data = b"%PDF-1.4 ".to_vec();
        data.extend(std::iter::repeat(b'x').take(64));
        let response = app
            .oneshot(multipart_request("pdf", "application/pdf", &data))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn extraction_failure_is_500_with_detail() {
        let app = router_with(FailingExtractor);
        let response = app
            .oneshot(multipart_request("pdf", "application/pdf", b"%PDF-1.4"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "PDF_PROCESSING_FAILED");
        assert_eq!(
            json["error"]["message"],
            "Failed to process PDF: invalid xref table"
        );
    }

    #[tokio::test]
    async fn extractor_panic_is_reported_not_propagated() {
        let app = router_with(PanickingExtractor);
        let response = app
            .oneshot(multipart_request("pdf", "application/pdf", b"%PDF-1.4"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "PDF_PROCESSING_FAILED");
    }

    #[tokio::test]
    async fn cors_headers_present() {
        let app = router_with(CannedExtractor(""));
        let response = app
            .oneshot(
                Request::get("/api/health")
                    .header("origin", "http://example.test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn unknown_path_without_static_dir_is_404() {
        let app = router_with(CannedExtractor(""));
        let response = app
            .oneshot(Request::get("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn static_dir_serves_front_end() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>GlucoVista</h1>").unwrap();

        let config = ServerConfig {
            static_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let app = router_with_config(config, CannedExtractor(""));
        let response = app
            .oneshot(Request::get("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"<h1>GlucoVista</h1>");
    }
}
