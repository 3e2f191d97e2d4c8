//! Session token handlers.

use actix_web::{HttpResponse, web};
use serde_json::{Map, Value};

use blogzone_shared::dto::SuccessResponse;

use crate::middleware::auth::{cleared_session_cookie, session_cookie};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /jwt
///
/// Signs whatever object the client sends and sets it as the session cookie.
pub async fn issue_token(
    state: web::Data<AppState>,
    body: web::Json<Map<String, Value>>,
) -> AppResult<HttpResponse> {
    let token = state.tokens.issue_token(body.into_inner())?;

    tracing::info!(
        expires_in = state.tokens.expiration_seconds(),
        "Session token issued"
    );

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token))
        .json(SuccessResponse::ok()))
}

/// POST /logout
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(cleared_session_cookie())
        .json(SuccessResponse::ok())
}
