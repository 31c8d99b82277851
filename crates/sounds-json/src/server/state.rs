//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::scanner::{FsScanner, Scanner};

/// Application state shared across all request handlers.
///
/// Holds no per-request data; every field is `Arc`-backed so Axum can clone
/// the state for each request cheaply.
#[derive(Clone)]
pub struct AppState {
    /// Builds sound maps for validated directories.
    pub scanner: Arc<dyn Scanner>,
}

impl AppState {
    /// Create a new [`AppState`] around the given scanner.
    pub fn new(scanner: Arc<dyn Scanner>) -> Self {
        Self { scanner }
    }
}

impl Default for AppState {
    /// State backed by the real filesystem.
    fn default() -> Self {
        Self::new(Arc::new(FsScanner))
    }
}
