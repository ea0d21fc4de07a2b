//! Response types returned by the fixture server.

use serde::{Deserialize, Serialize};

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"not_found"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_new() {
        let e = ErrorResponse::new("not_found", "no such route");
        assert_eq!(e.code, "not_found");
        assert!(e.message.contains("no such route"));
    }

    #[test]
    fn error_response_serde() {
        let e = ErrorResponse::new("not_found", "no such route");
        let json = serde_json::to_string(&e).unwrap();
        let decoded: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.code, "not_found");
    }
}
