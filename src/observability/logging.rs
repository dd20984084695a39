//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Pick the filter from `RUST_LOG`, else from configuration
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Human-readable fmt output; fields carry request id, locale, path

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Build the log filter: `RUST_LOG` wins over the configured level.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(config: &ObservabilityConfig) {
    let result = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
