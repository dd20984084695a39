//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Locale middleware, upstream forwarding, startup:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line of a request
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
