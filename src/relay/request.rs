//! The inbound request as the relay core sees it.
//!
//! Built by the HTTP boundary from the raw Axum request and handed to the
//! controller; the core never reads ambient server state itself.

use axum::http::{header, HeaderMap, Method};

/// Reserved parameter naming the target URL. Stripped before forwarding.
pub const URL_PARAM: &str = "url";

/// One inbound request, decomposed. Read-only to the relay core.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    pub headers: HeaderMap,
    /// Query string pairs in wire order.
    pub query: Vec<(String, String)>,
    /// Form-decoded body pairs in wire order.
    pub form: Vec<(String, String)>,
}

impl InboundRequest {
    /// The `Origin` header value, if the caller sent one.
    pub fn origin(&self) -> Option<&str> {
        self.headers
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok())
    }

    /// The raw target URL string: the `url` parameter from the query string,
    /// falling back to the body parameters.
    pub fn target_param(&self) -> Option<&str> {
        self.query
            .iter()
            .chain(self.form.iter())
            .find(|(key, _)| key == URL_PARAM)
            .map(|(_, value)| value.as_str())
    }
}
