//! Authenticated caller's identity.

use axum::{Extension, Json};

use crate::{
    middleware::auth::AuthContext,
    models::{claims::Claims, response::ApiResponse},
};

/// Return the claims of the token used for this request.
///
/// # Endpoint
///
/// `GET /api/v1/me`
///
/// # Authentication
///
/// Requires a valid bearer token; the auth middleware rejects the request
/// with 401 before this handler runs otherwise.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "success": true,
///   "message": "Authenticated",
///   "data": { "sub": "user-1", "email": "user-1@example.com", "exp": 1767225600, "iat": 1767224700 }
/// }
/// ```
pub async fn current_user(Extension(auth): Extension<AuthContext>) -> Json<ApiResponse<Claims>> {
    Json(ApiResponse::ok("Authenticated", auth.claims))
}
