//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::response::ApiResponse;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code. The `Display` text of a
/// variant is exactly the message sent to the client.
///
/// # Error Categories
///
/// - **Request-shape errors**: the `Authorization` header is missing or malformed
/// - **Token errors**: the bearer token was rejected by the validator. The
///   underlying cause is never exposed to the client.
/// - **Internal errors**: a downstream handler failed unexpectedly
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No `Authorization` header, or an empty one.
    #[error("Authorization header is required")]
    MissingAuthHeader,

    /// Header value does not split into a scheme and a credential.
    #[error("Invalid authorization format. Use: Bearer <token>")]
    InvalidAuthFormat,

    /// Scheme is anything other than the exact string `Bearer`.
    #[error("Invalid authorization type. Expected: Bearer")]
    InvalidAuthScheme,

    /// Scheme present but the token after it is empty.
    #[error("Token is required")]
    MissingToken,

    /// Token is expired, malformed or carries a bad signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Unexpected failure further down the chain.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Internal server error")]
    Internal,
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingAuthHeader
            | AppError::InvalidAuthFormat
            | AppError::InvalidAuthScheme
            | AppError::MissingToken
            | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "success": false,
///   "message": "Human-readable error message"
/// }
/// ```
///
/// `Json` sets `Content-Type: application/json`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::error(self.to_string()));

        (self.status(), body).into_response()
    }
}
