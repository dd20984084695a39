//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::locale::{Locale, LocaleError, LocaleSettings};

/// Root configuration for the locale gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Supported locales and the fallback locale.
    pub locales: LocalesConfig,

    /// Paths that bypass locale routing.
    pub routing: RoutingConfig,

    /// Page renderer that receives locale-prefixed requests.
    /// Without one, an echo handler answers instead.
    pub upstream: Option<UpstreamConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Locale configuration.
///
/// ```toml
/// [locales]
/// supported = ["ca", "en", "de", "fr", "it", "es"]
/// default = "en"
///
/// [locales.names]
/// ca = "Català"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalesConfig {
    /// Supported locale codes, in preference order.
    pub supported: Vec<String>,

    /// Locale used when negotiation finds nothing.
    pub default: String,

    /// Display names by code. Missing entries fall back to the built-in
    /// name for the site's languages, then to the code itself.
    pub names: BTreeMap<String, String>,
}

impl LocalesConfig {
    /// Validate and freeze into [`LocaleSettings`].
    pub fn to_settings(&self) -> Result<LocaleSettings, LocaleError> {
        let builtin = LocaleSettings::default();
        let locales = self
            .supported
            .iter()
            .map(|code| {
                let name = self
                    .names
                    .get(code)
                    .map(String::as_str)
                    .or_else(|| {
                        builtin
                            .locales()
                            .iter()
                            .find(|l| &l.code == code)
                            .map(|l| l.name.as_str())
                    })
                    .unwrap_or(code.as_str());
                Locale::new(code.clone(), name)
            })
            .collect();
        LocaleSettings::new(locales, &self.default)
    }
}

impl Default for LocalesConfig {
    fn default() -> Self {
        let settings = LocaleSettings::default();
        Self {
            supported: settings.codes().map(String::from).collect(),
            default: settings.default_locale().to_string(),
            names: BTreeMap::new(),
        }
    }
}

/// Paths that locale routing leaves alone.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Path prefixes forwarded untouched (framework assets, APIs).
    pub excluded_prefixes: Vec<String>,

    /// Forward any path containing a `.` untouched (static files).
    pub skip_file_paths: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            excluded_prefixes: vec!["/_next".to_string()],
            skip_file_paths: true,
        }
    }
}

/// Upstream page renderer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Renderer address (e.g., "127.0.0.1:3000").
    pub address: String,
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Upstream connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter used when `RUST_LOG` is unset (e.g. "info" or
    /// "locale_gateway=debug,tower_http=info").
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "locale_gateway=info,tower_http=info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
