//! Per-request orchestration: validate → gate → (preflight | forward) → relay.
//!
//! The controller owns no ambient state. It receives a decomposed inbound
//! request, runs the pipeline, and returns either a caller-facing response
//! or a classified error; the HTTP boundary renders both.

use axum::http::Method;

use crate::config::RelayConfig;
use crate::relay::error::RelayError;
use crate::relay::forward::RequestForwarder;
use crate::relay::gate::HostGate;
use crate::relay::headers::HeaderFilter;
use crate::relay::request::InboundRequest;
use crate::relay::respond::{self, ProxyResponse};
use crate::relay::target::TargetUrl;

/// Stateless relay pipeline, shared read-only across requests.
pub struct ProxyController {
    gate: HostGate,
    forwarder: RequestForwarder,
    allowed_headers: Vec<String>,
}

impl ProxyController {
    /// Wire the pipeline from validated configuration and an injected
    /// outbound client.
    pub fn new(config: &RelayConfig, client: reqwest::Client) -> Self {
        let filter = HeaderFilter::new(config.policy.allowed_headers.iter().cloned());
        Self {
            gate: HostGate::new(config.policy.allowed_hosts.iter().cloned()),
            forwarder: RequestForwarder::new(client, config.policy.header_mode, filter),
            allowed_headers: config.policy.allowed_headers.clone(),
        }
    }

    /// Handle one inbound request end to end.
    pub async fn handle(&self, req: InboundRequest) -> Result<ProxyResponse, RelayError> {
        let raw = req.target_param().unwrap_or_default();
        let target = TargetUrl::parse(raw)?;

        if !self.gate.is_allowed(target.host()) {
            return Err(RelayError::HostNotAllowed(target.host().to_string()));
        }

        if req.method == Method::OPTIONS {
            tracing::debug!(host = %target.host(), "Answering preflight, no upstream call");
            return Ok(respond::preflight(&self.allowed_headers, req.origin()));
        }

        let upstream = self.forwarder.forward(&req, &target).await?;
        tracing::debug!(
            target = %target.render(),
            status = %upstream.status,
            "Relaying upstream response"
        );
        Ok(respond::relay(upstream, req.origin()))
    }
}
