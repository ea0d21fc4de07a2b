//! TLS accept loop.
//!
//! For each incoming TCP connection:
//! 1. Perform the TLS handshake with the shared acceptor.
//! 2. Serve HTTP/1.1 or HTTP/2 over the encrypted stream.
//!
//! Handshake and per-connection errors are logged and the loop keeps
//! accepting. Only a failure to bind the listener is fatal.

use anyhow::{Context, Result};
use axum::Router;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use hyper_util::service::TowerToHyperService;
use rustls::ServerConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio_rustls::TlsAcceptor;
use tracing::{debug, error, warn};

/// Bind `addr` and serve `router` over TLS until the process exits.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot be bound.
pub async fn run(addr: SocketAddr, tls_config: Arc<ServerConfig>, router: Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    run_with_listener(listener, tls_config, router).await
}

/// Accept loop over an already-bound listener. Split out so tests can bind
/// an ephemeral port first.
pub async fn run_with_listener(
    listener: TcpListener,
    tls_config: Arc<ServerConfig>,
    router: Router,
) -> Result<()> {
    let acceptor = TlsAcceptor::from(tls_config);

    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                debug!(%peer_addr, "accepted TCP connection");
                let acceptor = acceptor.clone();
                let router = router.clone();
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, acceptor, router).await {
                        warn!(%peer_addr, error = %e, "connection error");
                    }
                });
            }
            Err(e) => {
                error!(error = %e, "accept error");
            }
        }
    }
}

/// TLS handshake plus HTTP serving for a single connection.
async fn handle_connection(stream: TcpStream, acceptor: TlsAcceptor, router: Router) -> Result<()> {
    let tls_stream = acceptor.accept(stream).await.context("TLS handshake failed")?;

    let service = TowerToHyperService::new(router);
    auto::Builder::new(TokioExecutor::new())
        .serve_connection(TokioIo::new(tls_stream), service)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP connection error: {e}"))?;

    Ok(())
}
