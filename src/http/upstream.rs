//! Forwarding to the page renderer.
//!
//! # Responsibilities
//! - Send passthrough and excluded requests to the configured renderer
//! - Rewrite scheme and authority, keep path, query and headers
//! - Map connection failures to 502
//!
//! # Design Decisions
//! - Bodies are streamed, never buffered
//! - No retries

use axum::{
    body::Body,
    extract::{Request, State},
    http::{
        uri::{Authority, PathAndQuery, Scheme},
        Uri,
    },
    response::Response,
};
use hyper::body::Incoming;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::sync::Arc;
use std::time::Duration;

use crate::http::request::request_id;
use crate::http::response::bad_gateway;

/// Error building an upstream from configuration.
#[derive(Debug, thiserror::Error)]
#[error("invalid upstream address '{0}'")]
pub struct InvalidUpstream(pub String);

/// HTTP client bound to one renderer address.
#[derive(Clone)]
pub struct Upstream {
    client: Client<HttpConnector, Body>,
    authority: Authority,
}

impl Upstream {
    pub fn new(address: &str, connect_timeout: Duration) -> Result<Self, InvalidUpstream> {
        let authority: Authority = address
            .parse()
            .map_err(|_| InvalidUpstream(address.to_string()))?;

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(connect_timeout));
        let client = Client::builder(TokioExecutor::new()).build(connector);

        Ok(Self { client, authority })
    }

    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Point `uri` at the renderer, keeping path and query.
    fn rewrite(&self, uri: &Uri) -> Uri {
        let mut parts = uri.clone().into_parts();
        parts.scheme = Some(Scheme::HTTP);
        parts.authority = Some(self.authority.clone());
        if parts.path_and_query.is_none() {
            parts.path_and_query = Some(PathAndQuery::from_static("/"));
        }
        Uri::from_parts(parts).unwrap_or_else(|_| uri.clone())
    }

    pub async fn forward(&self, request: Request) -> Result<Response<Incoming>, hyper_util::client::legacy::Error> {
        let (mut parts, body) = request.into_parts();
        parts.uri = self.rewrite(&parts.uri);
        self.client.request(Request::from_parts(parts, body)).await
    }
}

/// Handler forwarding everything it receives to the renderer.
pub async fn forward_handler(State(upstream): State<Arc<Upstream>>, request: Request) -> Response {
    let request_id = request_id(&request).to_string();
    let path = request.uri().path().to_string();

    match upstream.forward(request).await {
        Ok(response) => response.map(Body::new),
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                path = %path,
                upstream = %upstream.authority(),
                error = %e,
                "Upstream error"
            );
            bad_gateway()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_keeps_path_and_query() {
        let upstream = Upstream::new("127.0.0.1:3000", Duration::from_secs(1)).unwrap();
        let uri: Uri = "/fr/menu?tab=pizzas".parse().unwrap();
        assert_eq!(
            upstream.rewrite(&uri).to_string(),
            "http://127.0.0.1:3000/fr/menu?tab=pizzas"
        );
    }

    #[test]
    fn test_invalid_address() {
        assert!(Upstream::new("not an address", Duration::from_secs(1)).is_err());
    }
}
