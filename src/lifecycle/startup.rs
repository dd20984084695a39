//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize subsystems in dependency order
//! - Start the metrics exporter when enabled
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use crate::http::server::{GatewayServer, ServerError};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Fatal startup errors.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("server setup failed: {0}")]
    Server(#[from] ServerError),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("metrics exporter failed: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bring the gateway up and serve until shutdown.
pub async fn start(config: GatewayConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let settings = config.locales.to_settings().map_err(ServerError::from)?;
    tracing::info!(
        locales = ?settings.codes().collect::<Vec<_>>(),
        default_locale = settings.default_locale(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let server = GatewayServer::new(config)?;

    let address = server.config().listener.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}
