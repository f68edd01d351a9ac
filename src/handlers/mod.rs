//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that receives request data extracted by
//! Axum and returns a JSON response.

/// Service liveness endpoint
pub mod health;
/// Caller identity endpoint
pub mod profile;
