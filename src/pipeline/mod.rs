pub mod extraction; // PDF → plain text
pub mod metrics; // plain text → clinical metrics
