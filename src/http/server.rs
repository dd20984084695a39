//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, locale routing)
//! - Choose the downstream: upstream renderer or echo handler
//! - Bind server to listener, shut down gracefully

use axum::{
    extract::Request,
    middleware::{self as axum_middleware, Next},
    response::Response,
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::handlers::{catalog_handler, echo_handler};
use crate::http::middleware::locale_middleware;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::upstream::{forward_handler, InvalidUpstream, Upstream};
use crate::lifecycle::signals::shutdown_signal;
use crate::locale::LocaleError;
use crate::observability::metrics;
use crate::routing::LocaleRouter;

/// Errors building the server from configuration.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Locales(#[from] LocaleError),

    #[error(transparent)]
    Upstream(#[from] InvalidUpstream),
}

/// HTTP server for the locale gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, ServerError> {
        let locale_router = Arc::new(LocaleRouter::from_config(&config.locales, &config.routing)?);

        let upstream = match &config.upstream {
            Some(upstream) => Some(Arc::new(Upstream::new(
                &upstream.address,
                Duration::from_secs(config.timeouts.connect_secs),
            )?)),
            None => None,
        };

        let router = Self::build_router(&config, locale_router, upstream);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, locale_router: Arc<LocaleRouter>, upstream: Option<Arc<Upstream>>) -> Router {
        let pages: Router = match upstream {
            Some(upstream) => Router::new()
                .route("/", any(forward_handler))
                .route("/{*path}", any(forward_handler))
                .with_state(upstream),
            None => Router::new()
                .route("/", any(echo_handler))
                .route("/{*path}", any(echo_handler))
                .with_state(locale_router.clone()),
        };

        let pages = pages.layer(axum_middleware::from_fn_with_state(
            locale_router.clone(),
            locale_middleware,
        ));

        Router::new()
            .route("/_locales", get(catalog_handler))
            .with_state(locale_router)
            .merge(pages)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            // Wraps the limit and timeout layers: their 413/408 responses count too.
            .layer(axum_middleware::from_fn(track_requests))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for driving the gateway without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until Ctrl+C, SIGTERM or `shutdown` fires.
    pub async fn run(self, listener: TcpListener, mut shutdown: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = ?self.config.upstream.as_ref().map(|u| u.address.as_str()),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown.recv() => tracing::info!("Shutdown requested"),
                    _ = shutdown_signal() => {}
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

async fn track_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let response = next.run(req).await;
    metrics::record_request(response.status().as_u16(), start);
    response
}
