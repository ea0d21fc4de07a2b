//! `smoke-server` — HTTPS smoke-test fixture entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured JSON logging.
//! 3. Load the TLS private key and certificate and build the rustls config.
//! 4. Build the Axum router and serve over TLS until interrupted.

mod config;
mod protocol;
mod server;
mod telemetry;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use tracing::info;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cfg.port,
        "smoke-server starting"
    );

    // -----------------------------------------------------------------------
    // 3. TLS material
    // -----------------------------------------------------------------------
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls crypto provider"))?;

    let tls_config = server::tls::load_server_config(&cfg.tls_cert_path, &cfg.tls_key_path).await?;

    // -----------------------------------------------------------------------
    // 4. HTTPS server
    // -----------------------------------------------------------------------
    let router = server::router::build();

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    info!(addr = %addr, "listening");

    // No connection draining on interrupt: the fixture exits immediately with
    // a success status, matching how the container is stopped in CI.
    tokio::select! {
        result = server::serve::run(addr, tls_config, router) => result,
        _ = shutdown_signal() => {
            info!("interrupt received, exiting");
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
}
