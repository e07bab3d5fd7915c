//! Shared types for the report API layer.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::pipeline::extraction::{PdfExtractor, PdfTextExtractor};

// ═══════════════════════════════════════════════════════════
// API context — shared state for the report API router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes. Holds only immutable data, so
/// cloning per request is cheap.
#[derive(Clone)]
pub struct ApiContext {
    pub extractor: Arc<dyn PdfExtractor + Send + Sync>,
    pub config: Arc<ServerConfig>,
}

impl ApiContext {
    /// Context backed by the real PDF text extractor.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_extractor(config, Arc::new(PdfTextExtractor))
    }

    pub fn with_extractor(
        config: ServerConfig,
        extractor: Arc<dyn PdfExtractor + Send + Sync>,
    ) -> Self {
        Self {
            extractor,
            config: Arc::new(config),
        }
    }
}
