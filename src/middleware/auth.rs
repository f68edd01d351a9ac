//! Bearer token authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the bearer token from the Authorization header
//! 2. Validate it with the injected [`TokenValidator`](crate::services::token_service::TokenValidator)
//! 3. Inject authentication context into the request
//! 4. Reject unauthorized requests with HTTP 401

use crate::{error::AppError, models::claims::Claims, services::token_service::SharedValidator};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

/// Authentication scheme accepted in the Authorization header (case-sensitive).
const BEARER_SCHEME: &str = "Bearer";

/// Authentication context attached to authenticated requests.
///
/// This struct is inserted into the request's extension map and can be
/// extracted by route handlers to know who made the request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub claims: Claims,
}

/// Split an Authorization header value into its bearer token.
///
/// The value is split at the first space into a scheme and a token, so
/// `"Bearer "` yields an empty token and `"Bearer a b"` yields `"a b"`.
fn parse_bearer(value: &str) -> Result<&str, AppError> {
    if value.is_empty() {
        return Err(AppError::MissingAuthHeader);
    }

    let (scheme, token) = value.split_once(' ').ok_or(AppError::InvalidAuthFormat)?;

    if scheme != BEARER_SCHEME {
        return Err(AppError::InvalidAuthScheme);
    }

    if token.is_empty() {
        return Err(AppError::MissingToken);
    }

    Ok(token)
}

/// Bearer token authentication middleware function.
///
/// # Flow
///
/// 1. Read the `Authorization` header; absent or empty is rejected
/// 2. Split it into `Bearer` and `<token>`
/// 3. Validate the token with the shared validator
/// 4. If valid: inject `AuthContext` into request, call next handler
/// 5. Otherwise: return 401 with the JSON error envelope
///
/// The error response is produced before the next handler runs, so a
/// rejected request never reaches it.
pub async fn auth_middleware(
    State(validator): State<SharedValidator>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = match request.headers().get(header::AUTHORIZATION) {
        None => return Err(AppError::MissingAuthHeader),
        // Non-visible-ASCII values cannot be a well-formed bearer credential
        Some(value) => value.to_str().map_err(|_| AppError::InvalidAuthFormat)?,
    };

    let token = parse_bearer(auth_header)?;

    let claims = validator.validate_token(token).map_err(|err| {
        tracing::debug!(error = %err, "Bearer token rejected");
        AppError::InvalidToken
    })?;

    // Route handlers can now extract this using Extension<AuthContext>
    request.extensions_mut().insert(AuthContext { claims });

    Ok(next.run(request).await)
}
