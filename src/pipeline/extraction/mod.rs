pub mod pdf;
pub mod types;

pub use pdf::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("Unsupported format for extraction: {0}")]
    UnsupportedFormat(&'static str),
}
