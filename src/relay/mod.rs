//! Relay pipeline subsystem.
//!
//! # Data Flow
//! ```text
//! InboundRequest (from http boundary)
//!     → target.rs (parse & validate the `url` parameter)
//!     → gate.rs (host allow-list check)
//!     → controller.rs branches:
//!         OPTIONS → respond.rs (preflight, no upstream call)
//!         else    → forward.rs (outbound call via injected client)
//!                 → respond.rs (copy status/headers/body, inject CORS)
//!     → ProxyResponse (back to http boundary)
//! ```
//!
//! # Design Decisions
//! - Everything here is per-request and stateless; the only shared values
//!   are the immutable allow-lists built at startup
//! - Errors are explicit `RelayError` returns; the boundary picks statuses

pub mod controller;
pub mod error;
pub mod forward;
pub mod gate;
pub mod headers;
pub mod request;
pub mod respond;
pub mod target;

pub use controller::ProxyController;
pub use error::RelayError;
pub use request::InboundRequest;
pub use respond::ProxyResponse;
pub use target::TargetUrl;
