use super::ExtractionError;

/// PDF text extraction abstraction (allows mocking for tests).
pub trait PdfExtractor {
    /// Full plain text of the document, pages concatenated in order.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Sniff the media type from magic bytes.
pub fn detect_mime_from_bytes(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"%PDF") {
        "application/pdf"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        "image/png"
    } else {
        "application/octet-stream"
    }
}
