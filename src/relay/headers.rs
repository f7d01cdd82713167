//! Header allow-listing.
//!
//! Reduces an arbitrary header map to the subset named in the configured
//! allowed-header set, case-insensitively. Only consulted when the forwarder
//! runs in `filtered` mode; `passthrough` mode bypasses it entirely.

use std::collections::HashSet;

use axum::http::HeaderMap;

/// Immutable allowed-header set, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct HeaderFilter {
    // Stored lower-cased; HeaderName keys are already lower-case.
    allowed: HashSet<String>,
}

impl HeaderFilter {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            allowed: names.into_iter().map(|name| name.to_lowercase()).collect(),
        }
    }

    /// Retain only headers whose name appears in the allow-list. Everything
    /// else is dropped silently; a dropped header is not an error.
    pub fn filter(&self, headers: &HeaderMap) -> HeaderMap {
        let mut kept = HeaderMap::new();
        for (name, value) in headers {
            if self.allowed.contains(name.as_str()) {
                kept.append(name.clone(), value.clone());
            }
        }
        kept
    }
}
