//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → LocaleRouter / server built from it once at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changing locales means a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, override_bind_address, parse_config, ConfigError};
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
pub use schema::LocalesConfig;
pub use schema::ObservabilityConfig;
pub use schema::RoutingConfig;
pub use schema::UpstreamConfig;
