//! Exclusion matching logic.
//!
//! # Responsibilities
//! - Match framework-internal path prefixes (e.g. `/_next`)
//! - Match requests for files (any `.` in the path)
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Query strings are never inspected
//! - No regex to guarantee O(n) matching

use axum::body::Body;
use axum::http::Request;

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &Request<Body>) -> bool;
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        req.uri().path().starts_with(&self.prefix)
    }
}

/// Matches paths that name a file, like `/favicon.ico` or `/img/hero.webp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilePathMatcher;

impl Matcher for FilePathMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        req.uri().path().contains('.')
    }
}

/// Combines multiple matchers with OR semantics.
/// An empty set matches nothing.
#[derive(Debug)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Matcher for AnyMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        self.matchers.iter().any(|m| m.matches(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::default()).unwrap()
    }

    #[test]
    fn test_path_matcher() {
        let matcher = PathPrefixMatcher::new("/_next");

        assert!(matcher.matches(&get("http://example.com/_next/static/app.js")));
        assert!(matcher.matches(&get("/_next")));
        assert!(!matcher.matches(&get("/menu")));
        assert!(!matcher.matches(&get("/en/_next")));
    }

    #[test]
    fn test_file_matcher() {
        let matcher = FilePathMatcher;

        assert!(matcher.matches(&get("/manifest.json")));
        assert!(matcher.matches(&get("/images/pizza-promotion-3x2.png")));
        assert!(!matcher.matches(&get("/menu?file=a.pdf")));
        assert!(!matcher.matches(&get("/pizza-builder")));
    }

    #[test]
    fn test_any_matcher() {
        let empty = AnyMatcher::new(Vec::new());
        assert!(empty.is_empty());
        assert!(!empty.matches(&get("/_next/x")));

        let matcher = AnyMatcher::new(vec![
            Box::new(PathPrefixMatcher::new("/_next")),
            Box::new(FilePathMatcher),
        ]);
        assert!(matcher.matches(&get("/_next/data")));
        assert!(matcher.matches(&get("/robots.txt")));
        assert!(!matcher.matches(&get("/contact")));
    }
}
