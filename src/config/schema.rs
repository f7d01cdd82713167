//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML config files.
//! Every field has a default so a minimal (or empty) config file is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the CORS relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address, body limit).
    pub listener: ListenerConfig,

    /// Forwarding policy: allow-lists and header mode.
    pub policy: PolicyConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum inbound body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// How inbound headers reach the upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Forward the inbound header set verbatim (minus transport headers).
    #[default]
    Passthrough,
    /// Forward only headers named in `allowed_headers`.
    Filtered,
}

/// Forwarding policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Hosts the relay will forward to. Exact, case-sensitive match.
    pub allowed_hosts: Vec<String>,

    /// Header names advertised on preflight and kept in `filtered` mode.
    /// Compared case-insensitively.
    pub allowed_headers: Vec<String>,

    /// Header forwarding mode.
    pub header_mode: HeaderMode,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: Vec::new(),
            allowed_headers: vec!["Content-Type".to_string(), "Accept".to_string()],
            header_mode: HeaderMode::default(),
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Upstream connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total upstream request/response timeout in seconds.
    pub upstream_secs: u64,

    /// End-to-end inbound request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            upstream_secs: 30,
            request_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_deserializes_with_defaults() {
        let config: RelayConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.policy.allowed_headers, vec!["Content-Type", "Accept"]);
        assert_eq!(config.policy.header_mode, HeaderMode::Passthrough);
        assert!(config.policy.allowed_hosts.is_empty());
    }

    #[test]
    fn test_policy_section_deserializes() {
        let config: RelayConfig = toml::from_str(
            r#"
            [policy]
            allowed_hosts = ["google.com", "api.example.com"]
            header_mode = "filtered"
            "#,
        )
        .unwrap();
        assert_eq!(config.policy.allowed_hosts.len(), 2);
        assert_eq!(config.policy.header_mode, HeaderMode::Filtered);
    }

    #[test]
    fn test_timeouts_deserialize() {
        let config: RelayConfig = toml::from_str(
            r#"
            [timeouts]
            upstream_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.timeouts.upstream_secs, 10);
        assert_eq!(config.timeouts.connect_secs, 5);
    }
}
