//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

use crate::middleware::cors::CorsPolicy;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `JWT_SECRET` (required): shared secret used to verify HS256 bearer tokens
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `CORS_ALLOWED_ORIGINS` (optional): comma-separated origin allow-list.
///   When unset, any request origin is reflected back.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub jwt_secret: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default)]
    pub cors_allowed_origins: Option<Vec<String>>,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., JWT_SECRET)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: jwt_secret -> JWT_SECRET
        envy::from_env::<Config>()
    }

    /// Build the CORS origin policy from `CORS_ALLOWED_ORIGINS`.
    ///
    /// Blank entries are ignored; a list that ends up empty falls back to
    /// reflecting any origin.
    pub fn cors_policy(&self) -> CorsPolicy {
        let origins: Vec<String> = self
            .cors_allowed_origins
            .iter()
            .flatten()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            CorsPolicy::ReflectAny
        } else {
            CorsPolicy::AllowList(origins)
        }
    }
}
