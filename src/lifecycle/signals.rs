//! OS signal handling.
//!
//! Translates Ctrl+C into the internal shutdown signal so in-flight
//! requests drain instead of being cut off.

use crate::lifecycle::shutdown::Shutdown;
use std::sync::Arc;

/// Spawn a task that triggers shutdown on Ctrl+C.
pub fn listen_for_shutdown(shutdown: Arc<Shutdown>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl+C received, shutting down");
            shutdown.trigger();
        }
    });
}
