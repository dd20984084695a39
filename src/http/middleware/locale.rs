//! Locale routing middleware.
//! Redirects unprefixed page requests to their negotiated locale.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::http::request::request_id;
use crate::http::response::{locale_redirect, set_content_language};
use crate::observability::metrics;
use crate::routing::{LocaleRouter, RoutingDecision};

/// Locale a passthrough request is served in, available to handlers as a
/// request extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLocale(pub String);

pub async fn locale_middleware(
    State(router): State<Arc<LocaleRouter>>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(decision) = router.route_request(&req) else {
        tracing::trace!(path = %req.uri().path(), "Excluded from locale routing");
        metrics::record_decision("excluded", "none");
        return next.run(req).await;
    };

    metrics::record_decision(decision.as_label(), decision.locale());

    match decision {
        RoutingDecision::Redirect { locale, location } => {
            tracing::debug!(
                request_id = %request_id(&req),
                path = %req.uri().path(),
                locale = %locale,
                location = %location,
                "Redirecting to locale"
            );
            locale_redirect(&location)
        }
        RoutingDecision::Passthrough { locale } => {
            tracing::debug!(
                request_id = %request_id(&req),
                path = %req.uri().path(),
                locale = %locale,
                "Locale prefix present"
            );
            req.extensions_mut().insert(ResolvedLocale(locale.clone()));
            let mut response = next.run(req).await;
            set_content_language(&mut response, &locale);
            response
        }
    }
}
