//! Router construction.
//!
//! Decides which routes exist, which of them require authentication, and the
//! order the middlewares wrap them in.

use std::sync::Arc;

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::{
    handlers,
    middleware::{
        auth::auth_middleware,
        cors::{CorsPolicy, cors_middleware},
        logging::logging_middleware,
        recovery::recovery_layer,
    },
    services::token_service::SharedValidator,
};

/// Build the full application.
///
/// Request flow, outermost first:
///
/// ```text
/// logging -> cors -> recovery -> router -> auth (protected routes) -> handler
/// ```
///
/// - CORS answers preflights before routing, so they never hit auth.
/// - Recovery sits inside CORS and logging, so a panic's 500 still carries
///   CORS headers and is logged with its real status.
pub fn build_app(validator: SharedValidator, cors_policy: CorsPolicy) -> Router {
    // Routes behind bearer token authentication
    let authenticated_routes = Router::new()
        .route("/api/v1/me", get(handlers::profile::current_user))
        .route_layer(axum_middleware::from_fn_with_state(
            validator,
            auth_middleware,
        ));

    let routes = Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        .merge(authenticated_routes);

    with_middleware(routes, cors_policy)
}

/// Wrap `routes` in the request-wide middleware stack.
fn with_middleware(routes: Router, cors_policy: CorsPolicy) -> Router {
    // Layers added later wrap the ones added earlier
    routes
        .layer(recovery_layer())
        .layer(axum_middleware::from_fn_with_state(
            Arc::new(cors_policy),
            cors_middleware,
        ))
        .layer(axum_middleware::from_fn(logging_middleware))
}
