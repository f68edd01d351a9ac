//! HTTP middleware components.
//!
//! Each middleware wraps the rest of the chain and either forwards the
//! request or answers it directly. The order they are stacked in is decided
//! by [`crate::app::build_app`].

/// Bearer token authentication
pub mod auth;
/// CORS headers and preflight handling
pub mod cors;
/// Per-request structured logging
pub mod logging;
/// Panic to 500 conversion
pub mod recovery;
