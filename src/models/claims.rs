//! Bearer token claims.

use serde::{Deserialize, Serialize};

/// Identity carried by a validated bearer token.
///
/// Timestamps are Unix seconds, as in the JWT registered claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id the token was issued to
    pub sub: String,

    /// Email of the user, when the issuer includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Expiration time
    pub exp: i64,

    /// Issued at, optional like every registered claim except `exp`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}
