//! Collaborators used by the middleware and handlers.

/// Bearer token validation
pub mod token_service;
