//! Target URL parsing and validation.
//!
//! # Responsibilities
//! - Parse the caller-supplied `url` parameter into scheme/host/path
//! - Reject anything that is not an absolute URL with scheme and host
//! - Rebuild the outbound URI from the validated parts only
//!
//! # Design Decisions
//! - Everything downstream consumes the parsed value, never the raw string
//! - A bare "/" path is treated as absent, so render() omits it
//! - Non-default ports survive the round trip; default ports are dropped
//!   by the URL parser and never reappear

use url::Url;

use crate::relay::error::RelayError;

/// A validated absolute target URL. Exists only if the source string parsed
/// into a non-empty scheme and host. Immutable; built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl {
    scheme: String,
    host: String,
    port: Option<u16>,
    path: Option<String>,
}

impl TargetUrl {
    /// Parse and validate a candidate target URL string.
    pub fn parse(raw: &str) -> Result<Self, RelayError> {
        // The WHATWG parser repairs "https:/host" into "https://host"; the
        // relay wants such inputs rejected, not repaired.
        if !raw.contains("://") {
            return Err(RelayError::InvalidUrl(raw.to_string()));
        }

        let url = Url::parse(raw).map_err(|_| RelayError::InvalidUrl(raw.to_string()))?;

        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(RelayError::InvalidUrl(raw.to_string())),
        };

        let path = match url.path() {
            "" | "/" => None,
            path => Some(path.to_string()),
        };

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            port: url.port(),
            path,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host without port; this is what the allow-list is checked against.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Reconstruct `scheme://host[:port][path]` from the validated parts.
    /// An absent path renders as nothing, not "/".
    pub fn render(&self) -> String {
        let mut out = format!("{}://{}", self.scheme, self.host);
        if let Some(port) = self.port {
            out.push(':');
            out.push_str(&port.to_string());
        }
        if let Some(path) = &self.path {
            out.push_str(path);
        }
        out
    }
}
