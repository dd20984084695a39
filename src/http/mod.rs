//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layers)
//!     → request.rs (request ID)
//!     → middleware/locale.rs (route: redirect or passthrough)
//!     → upstream.rs / handlers.rs (renderer or echo)
//!     → response.rs (redirects, Content-Language)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;
pub mod upstream;

pub use middleware::ResolvedLocale;
pub use request::X_REQUEST_ID;
pub use server::GatewayServer;
