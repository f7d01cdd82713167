//! Request-scoped error taxonomy for the relay pipeline.
//!
//! Upstream HTTP error statuses (4xx/5xx from the target) are *not* errors
//! here; they are relayed verbatim. Only invalid input, a denied host, or a
//! transport-level failure abort a request.

use thiserror::Error;

/// Failure of a single relay request. The HTTP boundary decides the status
/// code and rendering; the core only classifies.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Target string absent, unparsable, or missing scheme/host.
    #[error("'{0}' is not a valid target URL")]
    InvalidUrl(String),

    /// Parsed host is not in the configured allow-list.
    #[error("'{0}' is not an allowed host")]
    HostNotAllowed(String),

    /// Outbound transport failure (connect refused, timeout, DNS).
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}
