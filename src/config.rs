use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "GlucoVista";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_PORT: u16 = 3000;
/// Upload limit for a single report (10 MB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Characters of extracted text echoed back for debugging.
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "glucovista=info,glucovista_lib=info,tower_http=info"
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub preview_chars: usize,
    /// Front-end directory served for paths outside `/api`.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Read `PORT`, `GLUCOVISTA_HOST`, `GLUCOVISTA_MAX_UPLOAD_MB` and
    /// `GLUCOVISTA_STATIC_DIR` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(port) = parse_var(&lookup, "PORT") {
            config.port = port;
        }
        if let Some(host) = parse_var(&lookup, "GLUCOVISTA_HOST") {
            config.host = host;
        }
        if let Some(mb) = parse_var::<usize>(&lookup, "GLUCOVISTA_MAX_UPLOAD_MB") {
            config.max_upload_bytes = mb.saturating_mul(1024 * 1024);
        }
        if let Some(dir) = lookup("GLUCOVISTA_STATIC_DIR").filter(|d| !d.trim().is_empty()) {
            config.static_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

fn parse_var<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable config value");
            None
        }
    }
}
