//! CORS relay server.
//!
//! A small relay that lets browser clients reach third-party HTTP
//! resources lacking CORS headers, without exposing an open proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                  CORS RELAY                    │
//!                      │                                                │
//!  Client Request      │  ┌─────────┐   ┌──────────┐   ┌────────────┐  │
//!  ────────────────────┼─▶│  http   │──▶│ target + │──▶│ forwarder  │──┼──▶ Target
//!  (?url=<target>)     │  │ server  │   │ hostgate │   │ (reqwest)  │  │    Server
//!                      │  └─────────┘   └──────────┘   └────────────┘  │
//!                      │       │              │               │         │
//!                      │       │         OPTIONS?             ▼         │
//!  Client Response     │  ┌─────────┐   ┌──────────┐   ┌────────────┐  │
//!  ◀───────────────────┼──│ CORS    │◀──│ preflight│   │  response  │◀─┼──── Response
//!                      │  │ headers │   │ short-   │   │   relay    │  │
//!                      │  └─────────┘   │ circuit  │   └────────────┘  │
//!                      │                └──────────┘                    │
//!                      │  ┌──────────────────────────────────────────┐ │
//!                      │  │         Cross-Cutting Concerns           │ │
//!                      │  │   config     lifecycle    observability  │ │
//!                      │  └──────────────────────────────────────────┘ │
//!                      └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cors_relay::config::loader::load_config;
use cors_relay::config::RelayConfig;
use cors_relay::http::HttpServer;
use cors_relay::lifecycle::{signals, Shutdown};

#[derive(Parser)]
#[command(name = "cors-relay")]
#[command(about = "A host-gated CORS relay for browser clients", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cors_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("cors-relay v0.1.0 starting");

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => load_config(&path)?,
        None => RelayConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        allowed_hosts = ?config.policy.allowed_hosts,
        header_mode = ?config.policy.header_mode,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Configuration loaded"
    );

    if config.policy.allowed_hosts.is_empty() {
        tracing::warn!("allowed_hosts is empty; every relay request will be denied");
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Arc::new(Shutdown::new());
    signals::listen_for_shutdown(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
