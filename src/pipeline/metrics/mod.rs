//! Clinical metric extraction from free report text.
//!
//! Each metric has an ordered list of regex pattern groups. The first group
//! whose first match yields a plausible value wins; everything else stays
//! absent.

pub mod extractor;
pub mod patterns;
pub mod types;

pub use extractor::{extract, normalize_for_matching};
pub use types::*;
