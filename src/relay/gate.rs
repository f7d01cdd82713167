//! Host allow-listing.
//!
//! # Design Decisions
//! - Exact, case-sensitive membership: no subdomain matching, no case
//!   folding, no port stripping (the gate receives a bare host)
//! - The set is built once at startup and only ever read afterwards

use std::collections::HashSet;

/// Immutable set of hosts the relay is willing to forward to.
#[derive(Debug, Clone, Default)]
pub struct HostGate {
    allowed: HashSet<String>,
}

impl HostGate {
    pub fn new(hosts: impl IntoIterator<Item = String>) -> Self {
        Self {
            allowed: hosts.into_iter().collect(),
        }
    }

    /// True iff the exact host string is an element of the configured set.
    pub fn is_allowed(&self, host: &str) -> bool {
        self.allowed.contains(host)
    }
}
