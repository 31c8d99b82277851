//! Axum HTTP server, routing, and middleware.
//!
//! # Responsibilities
//! - Define the Axum router with all routes and shared middleware.
//! - Serve the embedded landing page.
//! - Inject shared application state (`AppState`) into handlers.

pub mod handlers;
pub mod page;
pub mod router;
pub mod state;
