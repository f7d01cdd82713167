//! Response relaying and CORS header injection.
//!
//! # Responsibilities
//! - Copy upstream status/headers/body onto the caller-facing response
//! - Echo the inbound `Origin` back as `Access-Control-Allow-Origin`
//! - Synthesize the preflight response for OPTIONS without forwarding
//!
//! # Design Decisions
//! - The origin is mirrored, not validated: any requesting origin is echoed
//!   back with credentials allowed. That is a deliberate trust decision
//!   inherited from the relay's contract, not an oversight.
//! - Framing headers (Content-Length, Transfer-Encoding, Connection) are
//!   recomputed for the relayed body rather than copied

use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderValue, StatusCode};

use crate::relay::forward::UpstreamResponse;

pub const ALLOW_ORIGIN: &str = "access-control-allow-origin";
pub const ALLOW_CREDENTIALS: &str = "access-control-allow-credentials";
pub const ALLOW_METHODS: &str = "access-control-allow-methods";
pub const ALLOW_HEADERS: &str = "access-control-allow-headers";

/// The caller-facing response: relayed from upstream, or synthesized for
/// preflight. The HTTP boundary turns this into the wire response.
#[derive(Debug)]
pub struct ProxyResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Copy an upstream result onto the caller-facing response and inject the
/// CORS headers. Upstream 4xx/5xx statuses pass through untouched.
pub fn relay(upstream: UpstreamResponse, origin: Option<&str>) -> ProxyResponse {
    let mut headers = HeaderMap::new();
    for (name, value) in &upstream.headers {
        if matches!(
            name.as_str(),
            "content-length" | "transfer-encoding" | "connection"
        ) {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    inject_cors(&mut headers, origin);

    ProxyResponse {
        status: upstream.status,
        headers,
        body: upstream.body,
    }
}

/// Answer a CORS preflight directly: advertise methods and the configured
/// header allow-list, no body, no upstream call.
pub fn preflight(allowed_headers: &[String], origin: Option<&str>) -> ProxyResponse {
    let mut headers = HeaderMap::new();
    headers.insert(ALLOW_METHODS, HeaderValue::from_static("GET, POST, OPTIONS"));
    if let Ok(value) = HeaderValue::from_str(&allowed_headers.join(", ")) {
        headers.insert(ALLOW_HEADERS, value);
    }
    inject_cors(&mut headers, origin);

    ProxyResponse {
        status: StatusCode::OK,
        headers,
        body: Bytes::new(),
    }
}

fn inject_cors(headers: &mut HeaderMap, origin: Option<&str>) {
    if let Some(origin) = origin {
        if let Ok(value) = HeaderValue::from_str(origin) {
            headers.insert(ALLOW_ORIGIN, value);
            headers.insert(ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
        }
    }
}
