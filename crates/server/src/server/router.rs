//! Axum router construction.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers;

/// Build the application [`Router`] with all routes and middleware attached.
pub fn build() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
}
