//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query, Accept-Language)
//!     → matcher.rs (excluded? assets and framework internals)
//!     → paths.rs (already under /<locale>?)
//!     → router.rs (negotiate and build redirect target)
//!     → Return: Passthrough or Redirect
//!
//! Router Compilation (at startup):
//!     LocalesConfig + RoutingConfig
//!     → Validate locale set
//!     → Compile exclusion matchers
//!     → Freeze as immutable LocaleRouter
//! ```
//!
//! # Design Decisions
//! - Router compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always yields the same decision
//! - Routing a redirect target always yields Passthrough

pub mod matcher;
pub mod paths;
pub mod router;

pub use router::{route, IncomingRequest, LocaleRouter, RoutingDecision};
