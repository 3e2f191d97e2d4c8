//! JWT session token service.
//!
//! The client decides what goes into the token at login; this service adds
//! `iat`, `exp` and `iss`, signs with HS256 and checks all three on the way
//! back in.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::{Map, Value};

use blogzone_core::ports::{AuthError, TokenClaims, TokenService};

const DEFAULT_SECRET: &str = "change-me-in-production";

/// Registered claims owned by the server; client values for them are replaced.
const REGISTERED_CLAIMS: [&str; 3] = ["iat", "exp", "iss"];

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_secs: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            expiration_secs: 3600,
            issuer: "blog-zone".to_string(),
        }
    }
}

impl JwtConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_TOKEN_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());

        // Warn if using default secret in production
        if secret == DEFAULT_SECRET {
            let is_production = std::env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_TOKEN_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_TOKEN_SECRET for production use.");
            }
        }

        Self {
            secret,
            expiration_secs: std::env::var("JWT_EXPIRATION_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "blog-zone".to_string()),
        }
    }
}

/// JWT-based token service.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(JwtConfig::from_env())
    }
}

fn timestamp_claim(claims: &Map<String, Value>, key: &str) -> Result<i64, AuthError> {
    claims
        .get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| AuthError::InvalidToken(format!("missing `{}` claim", key)))
}

impl TokenService for JwtTokenService {
    fn issue_token(&self, mut claims: Map<String, Value>) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::seconds(self.config.expiration_secs);

        claims.insert("iat".to_string(), Value::from(now.timestamp()));
        claims.insert("exp".to_string(), Value::from(exp.timestamp()));
        claims.insert("iss".to_string(), Value::from(self.config.issuer.clone()));

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        // No clock tolerance past `exp`.
        validation.leeway = 0;

        let token_data =
            decode::<Map<String, Value>>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken(e.to_string()),
                }
            })?;

        let mut claims = token_data.claims;
        let issued_at = timestamp_claim(&claims, "iat")?;
        let exp = timestamp_claim(&claims, "exp")?;
        for key in REGISTERED_CLAIMS {
            claims.remove(key);
        }

        Ok(TokenClaims {
            claims,
            issued_at,
            exp,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        self.config.expiration_secs
    }
}
