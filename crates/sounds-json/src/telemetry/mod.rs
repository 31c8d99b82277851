//! Logging and tracing setup.
//!
//! Logs are structured JSON on stdout. Spans are additionally exported over
//! OTLP when `OTEL_EXPORTER_OTLP_ENDPOINT` is configured.
//!
//! Log level is configurable via `LOG_LEVEL` (default: `info`) and overridden
//! by `RUST_LOG` when present.

pub mod init;

pub use init::{init_telemetry, shutdown_telemetry};
