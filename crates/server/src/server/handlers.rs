//! Axum request handlers for the fixture endpoints.

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::protocol::ErrorResponse;

/// Body returned by `GET /`. Identifies the image under test to the
/// smoke-test harness.
pub const ROOT_BODY: &str = "node";

/// `GET /` — fixed response proving the TLS listener works end to end.
pub async fn root() -> &'static str {
    ROOT_BODY
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_returns_fixed_body() {
        assert_eq!(root().await, "node");
    }
}
