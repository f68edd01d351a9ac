//! Bearer token validation.
//!
//! The auth middleware only depends on the [`TokenValidator`] trait, so the
//! validation backend can be swapped (or stubbed in tests) without touching
//! the middleware. [`JwtValidator`] is the production implementation.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};

use crate::models::claims::Claims;

/// Why a token was rejected.
///
/// Only used for server-side diagnostics; clients always see the same
/// generic message.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(err),
        }
    }
}

/// Validates a raw bearer token and returns the identity it carries.
///
/// Implementations are shared by every in-flight request and must be safe
/// for concurrent use.
pub trait TokenValidator: Send + Sync {
    fn validate_token(&self, token: &str) -> Result<Claims, TokenError>;
}

/// Validator handle shared with the auth middleware.
pub type SharedValidator = Arc<dyn TokenValidator>;

/// HS256 JWT validator backed by a shared secret.
///
/// Checks the signature and the `exp` claim. Issuing tokens is the identity
/// provider's job, not this service's.
#[derive(Clone)]
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenValidator for JwtValidator {
    fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    pub(crate) const TEST_SECRET: &str = "test-secret-key-at-least-32-chars";

    /// Mint an HS256 token whose `exp` is `ttl` from now (negative for expired).
    pub(crate) fn mint_token(secret: &str, sub: &str, ttl: Duration) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: sub.to_string(),
            email: Some(format!("{sub}@example.com")),
            exp: (now + ttl).timestamp(),
            iat: Some(now.timestamp()),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_yields_claims() {
        let validator = JwtValidator::new(TEST_SECRET);
        let token = mint_token(TEST_SECRET, "user-1", Duration::minutes(15));

        let claims = validator.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email.as_deref(), Some("user-1@example.com"));
    }

    #[test]
    fn test_expired_token_is_rejected_as_expired() {
        let validator = JwtValidator::new(TEST_SECRET);
        let token = mint_token(TEST_SECRET, "user-1", Duration::hours(-2));

        let result = validator.validate_token(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_signature_is_invalid() {
        let validator = JwtValidator::new(TEST_SECRET);
        let token = mint_token("another-secret-of-similar-length!", "user-1", Duration::minutes(15));

        let result = validator.validate_token(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_token_without_iat_is_accepted() {
        let validator = JwtValidator::new(TEST_SECRET);
        let exp = (Utc::now() + Duration::minutes(15)).timestamp();
        let token = encode(
            &Header::default(),
            &json!({ "sub": "user-2", "exp": exp }),
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let claims = validator.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "user-2");
        assert_eq!(claims.iat, None);
        assert_eq!(claims.email, None);
    }

    #[test]
    fn test_garbage_is_invalid() {
        let validator = JwtValidator::new(TEST_SECRET);

        let result = validator.validate_token("invalid.token.here");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }
}
