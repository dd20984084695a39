//! Metrics collection and exposition.
//!
//! # Metrics
//! - `locale_gateway_decisions_total` (counter): routing decisions by kind, locale
//! - `locale_gateway_requests_total` (counter): responses by status
//! - `locale_gateway_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Labels stay low-cardinality: locales come from the supported set only

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter with its own HTTP listener.
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Count a routing decision. `kind` is "redirect", "passthrough" or "excluded".
pub fn record_decision(kind: &'static str, locale: &str) {
    counter!(
        "locale_gateway_decisions_total",
        "decision" => kind,
        "locale" => locale.to_string()
    )
    .increment(1);
}

/// Count a finished request and record its latency.
pub fn record_request(status: u16, start: Instant) {
    counter!("locale_gateway_requests_total", "status" => status.to_string()).increment(1);
    histogram!("locale_gateway_request_duration_seconds").record(start.elapsed().as_secs_f64());
}
