//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Metrics → Server → Bind listener → Serve
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT or Shutdown::trigger → Stop accepting → Drain → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then observability, then listener
//! - In-flight requests finish before the server returns

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
