//! Configuration loading and validation for the fixture server.
//!
//! All values are read from environment variables at startup, with defaults
//! matching the paths and port the build tooling bakes into the image. The
//! process exits with a clear error message if a value cannot be parsed.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated fixture server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the HTTPS listener binds on. The bind address is always `0.0.0.0`.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Filesystem path to the PEM-encoded TLS certificate.
    #[serde(default = "default_tls_cert_path")]
    pub tls_cert_path: String,

    /// Filesystem path to the PEM-encoded TLS private key.
    #[serde(default = "default_tls_key_path")]
    pub tls_key_path: String,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    8443
}
fn default_tls_cert_path() -> String {
    "/certificate/certificate.crt".into()
}
fn default_tls_key_path() -> String {
    "/certificate/certificate.key".into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or validation fails.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        ensure_non_empty(&self.tls_cert_path, "TLS_CERT_PATH")?;
        ensure_non_empty(&self.tls_key_path, "TLS_KEY_PATH")?;

        if self.port == 0 {
            anyhow::bail!("PORT must be a non-zero listen port");
        }
        Ok(())
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{name} is required and must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_image_layout() {
        assert_eq!(default_port(), 8443);
        assert_eq!(default_tls_cert_path(), "/certificate/certificate.crt");
        assert_eq!(default_tls_key_path(), "/certificate/certificate.key");
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_empty_cert_path() {
        let cfg = Config {
            port: default_port(),
            tls_cert_path: "  ".into(),
            tls_key_path: default_tls_key_path(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_key_path() {
        let cfg = Config {
            port: default_port(),
            tls_cert_path: default_tls_cert_path(),
            tls_key_path: "".into(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let cfg = Config {
            port: 0,
            tls_cert_path: default_tls_cert_path(),
            tls_key_path: default_tls_key_path(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        let cfg = Config {
            port: default_port(),
            tls_cert_path: default_tls_cert_path(),
            tls_key_path: default_tls_key_path(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_ok());
    }
}
