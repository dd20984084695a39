//! Locale Gateway (v1)
//!
//! Sits in front of the pizzeria site's page renderer and makes sure every
//! page URL carries one of the supported locales.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                LOCALE GATEWAY                │
//!                      │                                              │
//!   Client Request     │  ┌─────────┐   ┌───────────┐   ┌──────────┐  │
//!   ───────────────────┼─▶│  http   │──▶│  routing  │──▶│  locale  │  │
//!                      │  │ server  │   │ /<loc>/?  │   │negotiate │  │
//!                      │  └─────────┘   └─────┬─────┘   └────┬─────┘  │
//!                      │                      │              │        │
//!                      │          passthrough ▼              ▼ redirect
//!   Client Response    │  ┌─────────────────────┐   ┌──────────────┐  │
//!   ◀──────────────────┼──│ upstream renderer / │   │ 307 Location │  │
//!                      │  │ echo handler        │   │ /<loc><path> │  │
//!                      │  └─────────────────────┘   └──────────────┘  │
//!                      │                                              │
//!                      │  config · observability · lifecycle          │
//!                      └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use locale_gateway::config::{load_config, override_bind_address, GatewayConfig};
use locale_gateway::lifecycle::{startup, Shutdown};
use locale_gateway::observability::logging;

#[derive(Parser)]
#[command(name = "locale-gateway")]
#[command(about = "Locale negotiation and redirect gateway", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted.
    #[arg(short, long, env = "LOCALE_GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config = override_bind_address(config, bind)?;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?cli.config,
        bind_address = %config.listener.bind_address,
        "locale-gateway starting"
    );

    let shutdown = Shutdown::new();
    startup::start(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
