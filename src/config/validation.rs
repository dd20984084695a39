//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the locale set (non-empty, valid codes, default supported)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Detect exclusions that would swallow locale-prefixed pages
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::locale::LocaleError;

/// A single semantic problem with the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid {field} '{value}': expected host:port")]
    InvalidAddress { field: &'static str, value: String },

    #[error("locales: {0}")]
    Locales(#[from] LocaleError),

    #[error("locales.names has an entry for unsupported locale '{0}'")]
    UnknownLocaleName(String),

    #[error("routing.excluded_prefixes entry '{0}' must start with '/'")]
    RelativePrefix(String),

    #[error("routing.excluded_prefixes entry '{prefix}' hides locale '{locale}'")]
    PrefixShadowsLocale { prefix: String, locale: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Check `config` for semantic errors.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if let Some(upstream) = &config.upstream {
        check_address(&mut errors, "upstream.address", &upstream.address);
    }
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    match config.locales.to_settings() {
        Ok(settings) => {
            for code in config.locales.names.keys() {
                if !settings.contains(code) {
                    errors.push(ValidationError::UnknownLocaleName(code.clone()));
                }
            }
            for prefix in &config.routing.excluded_prefixes {
                if let Some(locale) = settings
                    .codes()
                    .find(|code| format!("/{}", code).starts_with(prefix.as_str()))
                {
                    errors.push(ValidationError::PrefixShadowsLocale {
                        prefix: prefix.clone(),
                        locale: locale.to_string(),
                    });
                }
            }
        }
        Err(e) => errors.push(e.into()),
    }

    for prefix in &config.routing.excluded_prefixes {
        if !prefix.starts_with('/') {
            errors.push(ValidationError::RelativePrefix(prefix.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.request_secs"));
    }
    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.connect_secs"));
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::Zero("security.max_body_size"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
