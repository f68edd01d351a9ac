//! Spore Hub Gateway - Main Application Entry Point
//!
//! HTTP front door for the Spore Hub API. Every request passes through a fixed
//! middleware chain (request logging, CORS, panic recovery) and protected
//! routes additionally require a valid bearer token.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Authentication**: HS256 JWT bearer tokens
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the token validator and CORS policy
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

mod app;
mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::EnvFilter;

use crate::{middleware::cors::CorsPolicy, services::token_service::JwtValidator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let cors_policy = config.cors_policy();
    match &cors_policy {
        CorsPolicy::ReflectAny => tracing::warn!(
            "CORS reflects any request origin while allowing credentials; \
             set CORS_ALLOWED_ORIGINS to restrict it"
        ),
        CorsPolicy::AllowList(origins) => {
            tracing::info!(origins = ?origins, "CORS restricted to allow-list")
        }
    }

    let validator = Arc::new(JwtValidator::new(&config.jwt_secret));
    let app = app::build_app(validator, cors_policy);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Connect info feeds the remote address into request logs
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
