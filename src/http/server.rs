//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum Router and wire up middleware (tracing, timeout,
//!   request ID)
//! - Build the shared outbound client and relay controller from config
//! - Decompose each inbound request into an [`InboundRequest`] for the core
//! - Map relay errors to client-facing statuses (400 / 403 / 502)
//! - Graceful shutdown via the lifecycle coordinator

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RelayConfig;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::relay::{InboundRequest, ProxyController, RelayError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ProxyController>,
    pub max_body_bytes: usize,
}

/// HTTP server for the CORS relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration. Fails if the
    /// outbound client cannot be built.
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        // One shared outbound client; timeouts live here so every forward
        // inherits them.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .timeout(Duration::from_secs(config.timeouts.upstream_secs))
            .build()?;

        let controller = Arc::new(ProxyController::new(&config, client));
        let state = AppState {
            controller,
            max_body_bytes: config.listener.max_body_bytes,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main relay handler: decompose the request, run the pipeline, render the
/// result or the error.
async fn relay_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let method = request.method().clone();

    let (parts, body) = request.into_parts();
    let query = parse_pairs(parts.uri.query().unwrap_or("").as_bytes());

    let body_bytes = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::warn!(request_id = %request_id, "Inbound body exceeded limit");
            return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
        }
    };
    let form = parse_pairs(&body_bytes);

    let inbound = InboundRequest {
        method: parts.method,
        headers: parts.headers,
        query,
        form,
    };

    match state.controller.handle(inbound).await {
        Ok(proxied) => {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                status = %proxied.status,
                "Relay complete"
            );
            let mut response = Response::new(Body::from(proxied.body));
            *response.status_mut() = proxied.status;
            *response.headers_mut() = proxied.headers;
            response
        }
        Err(err) => {
            let status = match &err {
                RelayError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
                RelayError::HostNotAllowed(_) => StatusCode::FORBIDDEN,
                RelayError::Upstream(_) => StatusCode::BAD_GATEWAY,
            };
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                status = %status,
                error = %err,
                "Relay request failed"
            );
            let body = serde_json::json!({ "error": err.to_string() });
            (status, axum::Json(body)).into_response()
        }
    }
}

/// Decode application/x-www-form-urlencoded pairs (query string or body).
fn parse_pairs(raw: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(raw).into_owned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs_decodes_percent_encoding() {
        let pairs = parse_pairs(b"url=https%3A%2F%2Fgoogle.com&a=1");
        assert_eq!(pairs[0], ("url".to_string(), "https://google.com".to_string()));
        assert_eq!(pairs[1], ("a".to_string(), "1".to_string()));
    }

    #[test]
    fn test_parse_pairs_empty_input() {
        assert!(parse_pairs(b"").is_empty());
    }
}
