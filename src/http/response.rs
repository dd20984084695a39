//! Response construction.
//!
//! # Responsibilities
//! - Build locale redirects (307, `Location`, `Vary: Accept-Language`)
//! - Tag passthrough responses with `Content-Language`
//!
//! # Design Decisions
//! - Always 307; the target depends on request headers
//! - An upstream `Content-Language` is left untouched

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};

/// Redirect to a locale-prefixed location.
pub fn locale_redirect(location: &str) -> Response {
    let mut response = Redirect::temporary(location).into_response();
    response
        .headers_mut()
        .insert(header::VARY, HeaderValue::from_static("accept-language"));
    response
}

/// Set `Content-Language` unless the downstream already did.
pub fn set_content_language(response: &mut Response, locale: &str) {
    if response.headers().contains_key(header::CONTENT_LANGUAGE) {
        return;
    }
    if let Ok(value) = HeaderValue::from_str(locale) {
        response.headers_mut().insert(header::CONTENT_LANGUAGE, value);
    }
}

/// Plain-text error for upstream failures.
pub fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_headers() {
        let response = locale_redirect("/fr/menu?tab=pizzas");
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/fr/menu?tab=pizzas");
        assert_eq!(response.headers()[header::VARY], "accept-language");
    }

    #[test]
    fn test_content_language_not_overwritten() {
        let mut response = StatusCode::OK.into_response();
        set_content_language(&mut response, "ca");
        assert_eq!(response.headers()[header::CONTENT_LANGUAGE], "ca");

        set_content_language(&mut response, "de");
        assert_eq!(response.headers()[header::CONTENT_LANGUAGE], "ca");
    }
}
