//! Built-in handlers: locale catalog and the echo page.

use axum::{
    extract::{Request, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::http::middleware::ResolvedLocale;
use crate::locale::Locale;
use crate::routing::paths::{strip_locale, switch_locale};
use crate::routing::LocaleRouter;

/// Body of `GET /_locales`.
#[derive(Debug, Serialize)]
pub struct LocaleCatalog {
    pub default: String,
    pub locales: Vec<Locale>,
}

/// List supported locales with their display names.
pub async fn catalog_handler(State(router): State<Arc<LocaleRouter>>) -> Json<LocaleCatalog> {
    let settings = router.settings();
    Json(LocaleCatalog {
        default: settings.default_locale().to_string(),
        locales: settings.locales().to_vec(),
    })
}

/// What the echo handler saw.
#[derive(Debug, Serialize)]
pub struct EchoPage {
    pub locale: Option<String>,
    /// Path and query as received.
    pub path: String,
    /// The page without its locale prefix.
    pub page: String,
    /// The same page in every supported locale, for a language switcher.
    /// Empty when no locale was resolved.
    pub alternates: Vec<String>,
}

/// Stand-in for the page renderer when no upstream is configured.
pub async fn echo_handler(State(router): State<Arc<LocaleRouter>>, request: Request) -> Json<EchoPage> {
    let settings = router.settings();
    let locale = request
        .extensions()
        .get::<ResolvedLocale>()
        .map(|l| l.0.clone());
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_else(|| "/".to_string());

    let uri_path = request.uri().path();
    let alternates = if locale.is_some() {
        settings
            .codes()
            .map(|code| switch_locale(settings, uri_path, code))
            .collect()
    } else {
        Vec::new()
    };

    Json(EchoPage {
        locale,
        page: strip_locale(settings, uri_path).to_string(),
        alternates,
        path,
    })
}
