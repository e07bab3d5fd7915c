pub mod api; // Report upload API
pub mod config;
pub mod form; // Health form autofill
pub mod pipeline;

use tracing_subscriber::EnvFilter;

/// Initialise logging and serve the report API until Ctrl-C.
pub async fn run() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let server_config = config::ServerConfig::from_env();
    tracing::info!(
        host = %server_config.host,
        port = server_config.port,
        max_upload_bytes = server_config.max_upload_bytes,
        "Loaded server configuration"
    );

    api::serve_until_ctrl_c(server_config).await
}
