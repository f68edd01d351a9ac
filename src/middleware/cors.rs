//! CORS (Cross-Origin Resource Sharing) middleware.
//!
//! Sets a fixed set of CORS headers on every response and answers `OPTIONS`
//! preflight requests directly, before authentication or any route handler.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, PATCH, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Requested-With, Accept, Origin";
const MAX_AGE_SECS: &str = "3600";
const EXPOSE_HEADERS: &str = "Content-Length, Content-Range";

/// Which request origins get CORS access.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsPolicy {
    /// Echo back whatever `Origin` the request carries.
    ///
    /// Combined with `Access-Control-Allow-Credentials: true` this lets any
    /// site make credentialed requests. Kept as the default for existing
    /// clients; prefer `AllowList` where the client origins are known.
    #[default]
    ReflectAny,

    /// Only the listed origins are granted access.
    AllowList(Vec<String>),
}

impl CorsPolicy {
    /// Value for `Access-Control-Allow-Origin`, or `None` when the origin is
    /// not permitted and no CORS headers should be sent.
    ///
    /// A request without an `Origin` header always resolves to `*`.
    fn allow_origin(&self, origin: Option<&HeaderValue>) -> Option<HeaderValue> {
        let origin = match origin {
            Some(origin) if !origin.is_empty() => origin,
            _ => return Some(HeaderValue::from_static("*")),
        };

        match self {
            CorsPolicy::ReflectAny => Some(origin.clone()),
            CorsPolicy::AllowList(allowed) => allowed
                .iter()
                .any(|allowed| allowed.as_bytes() == origin.as_bytes())
                .then(|| origin.clone()),
        }
    }
}

/// Insert CORS headers into `headers`.
///
/// Headers already present are left untouched: a handler that sets one of
/// these itself wins over the defaults.
fn apply_cors_headers(headers: &mut HeaderMap, allow_origin: HeaderValue) {
    let entries: [(HeaderName, HeaderValue); 6] = [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ),
        (
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static(MAX_AGE_SECS),
        ),
        (
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            HeaderValue::from_static(EXPOSE_HEADERS),
        ),
    ];

    for (name, value) in entries {
        headers.entry(name).or_insert(value);
    }
}

/// CORS middleware function.
///
/// # Flow
///
/// 1. Resolve the allowed origin from the `Origin` header and the policy
/// 2. `OPTIONS`: answer 200 with an empty body, never calling the next handler
/// 3. Anything else: call the next handler and decorate its response
pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let allow_origin = policy.allow_origin(request.headers().get(header::ORIGIN));

    // Preflights get 200 even for origins an allow-list rejects; the missing
    // CORS headers are what makes the browser refuse.
    let mut response = if *request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    if let Some(allow_origin) = allow_origin {
        apply_cors_headers(response.headers_mut(), allow_origin);
    }

    response
}
