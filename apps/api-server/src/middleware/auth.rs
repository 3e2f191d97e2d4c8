//! Session cookie handling and the authentication extractor.

use std::future::{Ready, ready};

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use serde_json::{Map, Value};

use blogzone_core::ports::{AuthError, TokenClaims};
use blogzone_shared::ErrorResponse;

use crate::state::AppState;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Session cookie: HTTP-only, secure, sent cross-site.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .finish()
}

/// Cookie that makes the browser drop the session cookie immediately.
///
/// Tokens already issued stay valid until they expire.
pub fn cleared_session_cookie() -> Cookie<'static> {
    let mut cookie = session_cookie(String::new());
    cookie.make_removal();
    cookie
}

/// Authenticated caller, decoded from the session cookie.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {:?}!", identity.email())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub claims: Map<String, Value>,
}

impl Identity {
    /// The `email` claim, if the token carries one.
    pub fn email(&self) -> Option<&str> {
        self.claims.get("email").and_then(Value::as_str)
    }

    /// Require that the caller is the owner identified by `email`.
    pub fn ensure_email(&self, email: &str) -> Result<(), AuthError> {
        match self.email() {
            Some(own) if own == email => Ok(()),
            _ => Err(AuthError::Forbidden),
        }
    }
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            claims: claims.claims,
        }
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::TokenExpired | AuthError::InvalidToken(_) | AuthError::MissingAuth => {
                actix_web::http::StatusCode::UNAUTHORIZED
            }
            AuthError::Forbidden => actix_web::http::StatusCode::FORBIDDEN,
            AuthError::Signing(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let error = match &self.0 {
            AuthError::TokenExpired | AuthError::InvalidToken(_) | AuthError::MissingAuth => {
                tracing::debug!(reason = %self.0, "Rejected session");
                ErrorResponse::unauthorized()
            }
            AuthError::Forbidden => ErrorResponse::forbidden(),
            AuthError::Signing(_) => ErrorResponse::internal_error(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return ready(Err(AuthenticationError(AuthError::InvalidToken(
                "Server configuration error".to_string(),
            ))));
        };

        let Some(cookie) = req.cookie(SESSION_COOKIE) else {
            return ready(Err(AuthenticationError(AuthError::MissingAuth)));
        };

        match state.tokens.validate_token(cookie.value()) {
            Ok(claims) => ready(Ok(Identity::from(claims))),
            Err(e) => ready(Err(AuthenticationError(e))),
        }
    }
}
