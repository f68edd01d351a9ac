//! Uniform JSON response envelope.

use serde::Serialize;

/// Body shape shared by every JSON response of the service.
///
/// ```json
/// { "success": false, "message": "Token is required" }
/// ```
///
/// Successful responses may carry a `data` payload; it is omitted from the
/// wire body when absent.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T = ()> {
    pub success: bool,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse {
    /// Failure envelope with no payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Success envelope wrapping `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}
