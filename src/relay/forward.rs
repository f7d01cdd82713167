//! Outbound request construction and dispatch.
//!
//! # Responsibilities
//! - Mirror the inbound method onto the outbound request
//! - Route parameters by method: query string for reads, form body otherwise
//! - Apply the configured header policy (passthrough or filtered)
//! - Classify transport failures; relay upstream HTTP errors as data
//!
//! # Design Decisions
//! - The outbound URI is always `target.render()`, never the raw input
//! - reqwest does not fail on non-2xx, so 4xx/5xx flow back as results
//! - Timeouts live on the shared client; dropping the inbound request drops
//!   the in-flight future, so client disconnects cancel the upstream call

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode};

use crate::config::HeaderMode;
use crate::relay::error::RelayError;
use crate::relay::headers::HeaderFilter;
use crate::relay::request::{InboundRequest, URL_PARAM};
use crate::relay::target::TargetUrl;

/// Buffered upstream result: status, headers, and full body.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Method-dependent parameter placement for the outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundParams {
    /// Attached as the outbound query string (read-style methods).
    Query(Vec<(String, String)>),
    /// Form-encoded into the outbound body (everything else).
    Form(Vec<(String, String)>),
}

/// Builds and issues the outbound request against a validated target.
pub struct RequestForwarder {
    client: reqwest::Client,
    header_mode: HeaderMode,
    filter: HeaderFilter,
}

impl RequestForwarder {
    pub fn new(client: reqwest::Client, header_mode: HeaderMode, filter: HeaderFilter) -> Self {
        Self {
            client,
            header_mode,
            filter,
        }
    }

    /// Issue the outbound call. Upstream HTTP error statuses come back as
    /// `Ok`; only transport-level failures are `Err`.
    pub async fn forward(
        &self,
        req: &InboundRequest,
        target: &TargetUrl,
    ) -> Result<UpstreamResponse, RelayError> {
        let mut builder = self.client.request(req.method.clone(), target.render());

        builder = match build_params(req) {
            OutboundParams::Query(pairs) => builder.query(&pairs),
            OutboundParams::Form(pairs) => builder.form(&pairs),
        };

        let headers = match self.header_mode {
            HeaderMode::Passthrough => strip_transport_headers(&req.headers),
            HeaderMode::Filtered => self.filter.filter(&req.headers),
        };
        builder = builder.headers(headers);

        let response = builder.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}

/// GET-like methods carry the remaining query parameters; everything else
/// carries the form-decoded body. The reserved `url` key never crosses.
pub fn build_params(req: &InboundRequest) -> OutboundParams {
    if is_read_method(&req.method) {
        OutboundParams::Query(
            req.query
                .iter()
                .filter(|(key, _)| key.as_str() != URL_PARAM)
                .cloned()
                .collect(),
        )
    } else {
        OutboundParams::Form(
            req.form
                .iter()
                .filter(|(key, _)| key.as_str() != URL_PARAM)
                .cloned()
                .collect(),
        )
    }
}

fn is_read_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD)
}

/// In passthrough mode the inbound headers go upstream verbatim, minus the
/// ones the outbound client must own itself.
fn strip_transport_headers(headers: &HeaderMap) -> HeaderMap {
    let mut kept = HeaderMap::new();
    for (name, value) in headers {
        if matches!(
            name.as_str(),
            "host" | "content-length" | "transfer-encoding" | "connection" | "expect"
        ) {
            continue;
        }
        kept.append(name.clone(), value.clone());
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn pairs(input: &[(&str, &str)]) -> Vec<(String, String)> {
        input
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn request(method: Method, query: &[(&str, &str)], form: &[(&str, &str)]) -> InboundRequest {
        InboundRequest {
            method,
            headers: HeaderMap::new(),
            query: pairs(query),
            form: pairs(form),
        }
    }

    #[test]
    fn test_get_forwards_query_without_url_key() {
        let req = request(
            Method::GET,
            &[("url", "https://x.com"), ("a", "1"), ("b", "2")],
            &[],
        );
        assert_eq!(
            build_params(&req),
            OutboundParams::Query(pairs(&[("a", "1"), ("b", "2")]))
        );
    }

    #[test]
    fn test_head_is_treated_as_read() {
        let req = request(Method::HEAD, &[("url", "https://x.com"), ("a", "1")], &[]);
        assert_eq!(build_params(&req), OutboundParams::Query(pairs(&[("a", "1")])));
    }

    #[test]
    fn test_post_forwards_form_body_not_query() {
        let req = request(
            Method::POST,
            &[("url", "https://x.com")],
            &[("a", "1"), ("b", "2")],
        );
        assert_eq!(
            build_params(&req),
            OutboundParams::Form(pairs(&[("a", "1"), ("b", "2")]))
        );
    }

    #[test]
    fn test_url_key_stripped_from_form_body_too() {
        let req = request(Method::POST, &[], &[("url", "https://x.com"), ("a", "1")]);
        assert_eq!(build_params(&req), OutboundParams::Form(pairs(&[("a", "1")])));
    }

    #[test]
    fn test_strip_transport_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("relay.local"));
        headers.insert("content-length", HeaderValue::from_static("12"));
        headers.insert("x-foo", HeaderValue::from_static("bar"));
        headers.insert("accept", HeaderValue::from_static("*/*"));

        let kept = strip_transport_headers(&headers);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept.get("x-foo").unwrap(), "bar");
        assert!(kept.get("host").is_none());
        assert!(kept.get("content-length").is_none());
    }
}
