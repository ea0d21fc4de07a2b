//! Axum HTTPS server, routing, and the TLS accept loop.
//!
//! # Responsibilities
//! - Load the TLS material and build the rustls server configuration.
//! - Define the Axum router with the fixture route.
//! - Accept TLS connections and serve HTTP over them until process exit.

pub mod handlers;
pub mod router;
pub mod serve;
pub mod tls;
