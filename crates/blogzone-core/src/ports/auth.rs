//! Session token port.

use serde_json::{Map, Value};

/// Claims carried by a session token.
///
/// `claims` is the object the client supplied at login, minus the
/// registered `iat`/`exp` fields which are lifted out.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub claims: Map<String, Value>,
    pub issued_at: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// The `email` claim, if the client put one in the token.
    pub fn email(&self) -> Option<&str> {
        self.claims.get("email").and_then(Value::as_str)
    }
}

/// Token service trait for signed session tokens.
pub trait TokenService: Send + Sync {
    /// Sign an arbitrary claims object into a time-limited token.
    fn issue_token(&self, claims: Map<String, Value>) -> Result<String, AuthError>;

    /// Check signature and expiry, returning the decoded claims.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Token lifetime in seconds.
    fn expiration_seconds(&self) -> i64;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing session cookie")]
    MissingAuth,

    #[error("Identity does not match the requested resource")]
    Forbidden,

    #[error("Token signing failed: {0}")]
    Signing(String),
}
