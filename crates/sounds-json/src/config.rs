//! Configuration loading and validation for the service.
//!
//! All values are read from environment variables at startup and every one has
//! a default, so the service starts with no environment at all. The process
//! exits with a clear error message if a value is present but invalid.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_host")]
    pub bind_host: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Tracing log level (e.g. `"info"`, `"debug"`), used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// OTLP/gRPC endpoint for span export. Export is disabled when unset.
    #[serde(default)]
    pub otel_exporter_otlp_endpoint: Option<String>,
}

fn default_bind_host() -> String {
    "127.0.0.1".into()
}
fn default_bind_port() -> u16 {
    5000
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
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
        if self.bind_host.trim().is_empty() {
            anyhow::bail!("BIND_HOST must not be empty");
        }
        if let Some(endpoint) = &self.otel_exporter_otlp_endpoint {
            if endpoint.trim().is_empty() {
                anyhow::bail!("OTEL_EXPORTER_OTLP_ENDPOINT must not be empty when set");
            }
        }
        Ok(())
    }
}
