pub mod api;
pub mod config;
pub mod middleware;
pub mod pages;
pub mod server;
pub mod ui;
pub mod util;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("API client error: {0}")]
    Api(#[from] api::ApiError),
    #[error("Server error: {0}")]
    Server(String),
}

/// Builds the application state and serves until the listener fails.
pub async fn run(config: config::Config) -> Result<(), ServerError> {
    match config.api.base_url.as_deref() {
        Some(url) => info!("Movie API at {}", url),
        None => warn!("API URL not configured; every fetch will fail until it is set"),
    }
    if config.debug_logs {
        info!("Debug logging enabled");
    }

    let api: Arc<dyn api::MovieApi> = Arc::new(api::ApiClient::new(&config.api)?);

    let placeholder = util::render_placeholder_png()
        .map_err(|e| ServerError::Server(format!("Failed to render placeholder image: {}", e)))?;

    let address = config.listen.address.as_deref().unwrap_or("[::]");
    let port = &config.listen.port;
    let addr: SocketAddr = format!("{}:{}", address, port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let tls = match (&config.listen.tlscert, &config.listen.tlskey) {
        (Some(cert), Some(key)) => Some((cert.clone(), key.clone())),
        _ => None,
    };

    let state = server::AppState::new(config, api, placeholder);
    let app = server::build_router(state);

    if let Some((cert_path, key_path)) = tls {
        info!("Loading TLS certificate from {}", cert_path);
        info!("Loading TLS key from {}", key_path);

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(&cert_path, &key_path)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

        info!("Serving HTTPS on {}", addr);

        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    } else {
        info!("Serving HTTP on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    }

    Ok(())
}
