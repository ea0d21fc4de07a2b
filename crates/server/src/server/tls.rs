//! TLS configuration from PEM files on disk.
//!
//! The certificate and private key are mounted into the container at fixed
//! paths by the build tooling that produces the image under test. This module
//! reads them and constructs a `rustls::ServerConfig`.

use anyhow::{Context, Result};
use rustls::ServerConfig;
use std::sync::Arc;

/// Read the PEM files at `cert_path` and `key_path` and build the server
/// configuration.
///
/// The key is read first, then the certificate, each in a single attempt.
///
/// # Errors
///
/// Returns an error if either file is missing or unreadable, or if the
/// material is rejected by [`build_server_config`]. There is no fallback.
pub async fn load_server_config(cert_path: &str, key_path: &str) -> Result<Arc<ServerConfig>> {
    let key_pem = tokio::fs::read(key_path)
        .await
        .with_context(|| format!("failed to read TLS private key at {key_path}"))?;

    let cert_pem = tokio::fs::read(cert_path)
        .await
        .with_context(|| format!("failed to read TLS certificate at {cert_path}"))?;

    build_server_config(&cert_pem, &key_pem)
}

/// Build a [`rustls::ServerConfig`] from PEM-encoded certificate and private
/// key bytes, advertising `h2` and `http/1.1` via ALPN.
///
/// # Errors
///
/// Returns an error if the certificate or key cannot be parsed, or if rustls
/// rejects the configuration.
pub fn build_server_config(cert_pem: &[u8], key_pem: &[u8]) -> Result<Arc<ServerConfig>> {
    let certs = rustls_pemfile::certs(&mut std::io::BufReader::new(cert_pem))
        .collect::<Result<Vec<_>, _>>()
        .context("failed to parse TLS certificate chain")?;

    let key = rustls_pemfile::private_key(&mut std::io::BufReader::new(key_pem))
        .context("failed to read TLS private key")?
        .context("no private key found in PEM data")?;

    let mut config = ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .context("failed to build rustls ServerConfig")?;

    config.alpn_protocols = vec![b"h2".to_vec(), b"http/1.1".to_vec()];

    Ok(Arc::new(config))
}
