//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parses)
//! - Catch allow-list entries that can never match
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::RelayConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    ZeroTimeout(&'static str),
    ZeroBodyLimit,
    EmptyAllowedHost,
    EmptyAllowedHeader,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address '{}' is not a socket address", addr)
            }
            ValidationError::ZeroTimeout(field) => {
                write!(f, "timeouts.{} must be greater than zero", field)
            }
            ValidationError::ZeroBodyLimit => {
                write!(f, "listener.max_body_bytes must be greater than zero")
            }
            ValidationError::EmptyAllowedHost => {
                write!(f, "policy.allowed_hosts contains an empty entry")
            }
            ValidationError::EmptyAllowedHeader => {
                write!(f, "policy.allowed_headers contains an empty entry")
            }
        }
    }
}

/// Validate a deserialized config. Collects every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.listener.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    for (value, field) in [
        (config.timeouts.connect_secs, "connect_secs"),
        (config.timeouts.upstream_secs, "upstream_secs"),
        (config.timeouts.request_secs, "request_secs"),
    ] {
        if value == 0 {
            errors.push(ValidationError::ZeroTimeout(field));
        }
    }

    if config.policy.allowed_hosts.iter().any(|host| host.is_empty()) {
        errors.push(ValidationError::EmptyAllowedHost);
    }

    if config
        .policy
        .allowed_headers
        .iter()
        .any(|header| header.is_empty())
    {
        errors.push(ValidationError::EmptyAllowedHeader);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
