//! Locale negotiation gateway for the multilingual pizzeria site.
//!
//! Requests without a locale prefix are redirected to
//! `/<negotiated-locale><path>`; prefixed requests go on to the page
//! renderer. The core decision is [`routing::route`], a pure function of
//! [`locale::LocaleSettings`] and an [`routing::IncomingRequest`].

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod locale;
pub mod observability;
pub mod routing;

pub use config::schema::GatewayConfig;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
pub use locale::LocaleSettings;
pub use routing::{route, IncomingRequest, RoutingDecision};
