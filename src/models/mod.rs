//! Data models shared by middleware and handlers.
//!
//! Nothing here is persisted; every value lives for a single request.

/// Identity claims carried by bearer tokens
pub mod claims;
/// JSON response envelope
pub mod response;
