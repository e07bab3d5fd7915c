//! Report upload API.
//!
//! Accepts lab-report PDFs over HTTP, extracts their text, and returns the
//! recognised clinical metrics as JSON. Routes are nested under `/api/`.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{serve_until_ctrl_c, start_server, ApiServer};
pub use types::ApiContext;
