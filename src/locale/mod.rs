//! Locale negotiation subsystem.
//!
//! # Data Flow
//! ```text
//! Accept-Language header
//!     → preferences.rs (parse weighted language ranges)
//!     → negotiate.rs (rank by weight, RFC 4647 lookup)
//!     → settings.rs (supported set, default fallback)
//!     → a supported locale code, always
//! ```
//!
//! # Design Decisions
//! - Settings are built once at startup and never mutated
//! - Malformed input degrades to "no preference", never to an error
//! - Pure functions only; safe to call from any number of requests at once

pub mod negotiate;
pub mod preferences;
pub mod settings;
pub mod tag;

pub use negotiate::{lookup, negotiate};
pub use preferences::{parse_accept_language, LanguagePreference};
pub use settings::{Locale, LocaleError, LocaleSettings};
pub use tag::LanguageTag;
