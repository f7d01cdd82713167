//! Minimal CORS relay library.
//!
//! Accepts an inbound HTTP request carrying a target URL in the reserved
//! `url` parameter, validates the URL and its host against an allow-list,
//! forwards an equivalent request to the target, and relays the response
//! back with CORS-enabling headers attached.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::{InboundRequest, ProxyController, RelayError, TargetUrl};
