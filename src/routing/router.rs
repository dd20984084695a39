//! Locale routing decisions.
//!
//! # Responsibilities
//! - Detect an explicit locale prefix and let the request through
//! - Otherwise negotiate a locale and build the redirect target
//! - Skip routing entirely for excluded paths (assets, internals)
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - An explicit prefix always wins over the client's preferences
//! - `/xx/menu` with an unsupported `xx` is redirected to `/<loc>/xx/menu`;
//!   the page router downstream relies on the first segment being a locale

use axum::body::Body;
use axum::http::{header, Request};
use std::sync::Arc;

use crate::config::{LocalesConfig, RoutingConfig};
use crate::locale::{negotiate, parse_accept_language, LanguagePreference, LocaleError, LocaleSettings};
use crate::routing::matcher::{AnyMatcher, FilePathMatcher, Matcher, PathPrefixMatcher};
use crate::routing::paths::{locale_prefix, normalize, split_query};

/// The parts of a request that routing looks at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomingRequest {
    /// Path, optionally followed by `?query`.
    pub path: String,
    /// Language preferences in header order.
    pub preferences: Vec<LanguagePreference>,
}

impl IncomingRequest {
    pub fn new(path: impl Into<String>, preferences: Vec<LanguagePreference>) -> Self {
        Self {
            path: path.into(),
            preferences,
        }
    }

    /// Extract path, query and `Accept-Language` from an HTTP request.
    ///
    /// A missing or non-ASCII header yields no preferences.
    pub fn from_http(req: &Request<Body>) -> Self {
        let path = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        let preferences = req
            .headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .map(parse_accept_language)
            .unwrap_or_default();

        Self::new(path, preferences)
    }
}

/// What to do with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// The path already names a supported locale.
    Passthrough { locale: String },
    /// Send the client to `location`, which starts with `/<locale>`.
    Redirect { locale: String, location: String },
}

impl RoutingDecision {
    pub fn is_passthrough(&self) -> bool {
        matches!(self, RoutingDecision::Passthrough { .. })
    }

    /// The locale the request is, or will be, served in.
    pub fn locale(&self) -> &str {
        match self {
            RoutingDecision::Passthrough { locale } => locale,
            RoutingDecision::Redirect { locale, .. } => locale,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            RoutingDecision::Passthrough { .. } => "passthrough",
            RoutingDecision::Redirect { .. } => "redirect",
        }
    }
}

/// Decide how to route `request` under `settings`.
pub fn route(settings: &LocaleSettings, request: &IncomingRequest) -> RoutingDecision {
    let path_and_query = normalize(&request.path);
    let (path, _) = split_query(path_and_query);

    if let Some(locale) = locale_prefix(settings, path) {
        return RoutingDecision::Passthrough {
            locale: locale.to_string(),
        };
    }

    let locale = negotiate(settings, &request.preferences);
    RoutingDecision::Redirect {
        locale: locale.to_string(),
        location: format!("/{}{}", locale, path_and_query),
    }
}

/// Routing engine shared by all requests.
#[derive(Debug)]
pub struct LocaleRouter {
    settings: Arc<LocaleSettings>,
    excluded: AnyMatcher,
}

impl LocaleRouter {
    pub fn new(settings: LocaleSettings) -> Self {
        Self {
            settings: Arc::new(settings),
            excluded: AnyMatcher::new(Vec::new()),
        }
    }

    /// Build the router from configuration, compiling exclusion rules.
    pub fn from_config(locales: &LocalesConfig, routing: &RoutingConfig) -> Result<Self, LocaleError> {
        let settings = locales.to_settings()?;

        let mut matchers: Vec<Box<dyn Matcher>> = routing
            .excluded_prefixes
            .iter()
            .map(|prefix| Box::new(PathPrefixMatcher::new(prefix.clone())) as Box<dyn Matcher>)
            .collect();
        if routing.skip_file_paths {
            matchers.push(Box::new(FilePathMatcher));
        }

        Ok(Self {
            settings: Arc::new(settings),
            excluded: AnyMatcher::new(matchers),
        })
    }

    pub fn settings(&self) -> &LocaleSettings {
        &self.settings
    }

    /// True if locale routing should not touch this request.
    pub fn is_excluded(&self, req: &Request<Body>) -> bool {
        self.excluded.matches(req)
    }

    /// Route an HTTP request. `None` means the request is excluded.
    pub fn route_request(&self, req: &Request<Body>) -> Option<RoutingDecision> {
        if self.is_excluded(req) {
            return None;
        }
        Some(route(&self.settings, &IncomingRequest::from_http(req)))
    }
}
