use super::types::{detect_mime_from_bytes, PdfExtractor};
use super::ExtractionError;

/// PDF text extractor using the pdf-extract crate.
/// Handles digital PDFs with embedded text layers; scanned pages yield no text.
pub struct PdfTextExtractor;

impl PdfExtractor for PdfTextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        let mime = detect_mime_from_bytes(pdf_bytes);
        if mime != "application/pdf" {
            return Err(ExtractionError::UnsupportedFormat(mime));
        }

        let text = pdf_extract::extract_text_from_mem(pdf_bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

        tracing::debug!(
            bytes = pdf_bytes.len(),
            chars = text.chars().count(),
            "PDF text extracted"
        );

        Ok(text)
    }
}
