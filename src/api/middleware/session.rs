//! Session token extraction
//!
//! The token is read from `Authorization: Bearer <token>` or, failing that,
//! from the `roster_session` cookie.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::session::{Session, SessionToken};

pub const SESSION_COOKIE: &str = "roster_session";

const LOGIN_REQUIRED: &str = "Login required. Provide the session token via \
     'Authorization: Bearer <token>' or the roster_session cookie";

/// Extractor for the caller's session token
#[derive(Debug, Clone)]
pub struct SessionCredential(pub SessionToken);

impl<S> FromRequestParts<S> for SessionCredential
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_session_token(&parts.headers).map(SessionCredential)
    }
}

/// Extractor for a caller with a live session
///
/// Resolves the session through the gate, so a handler taking it before
/// `Path` or `Json` denies anonymous callers ahead of any input parsing.
#[derive(Debug, Clone)]
pub struct RequireSession {
    pub token: SessionToken,
    pub session: Session,
}

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_session_token(&parts.headers)?;
        let session = state.session_gate.authorize(&token).await?;

        Ok(RequireSession { token, session })
    }
}

/// Bearer header first, then the session cookie
pub fn extract_session_token(headers: &HeaderMap) -> Result<SessionToken, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            let token = token.trim();
            if !token.is_empty() {
                return Ok(SessionToken::new(token));
            }
        }
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(cookie_token)
        .ok_or_else(|| ApiError::unauthorized(LOGIN_REQUIRED))
}

fn cookie_token(cookie_header: &str) -> Option<SessionToken> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| SessionToken::new(value))
}

/// `Set-Cookie` value carrying a fresh session token
pub fn session_cookie(token: &SessionToken, max_age_seconds: i64) -> String {
    format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE,
        token.as_str(),
        max_age_seconds
    )
}

/// `Set-Cookie` value that clears the session cookie
pub fn expired_session_cookie() -> String {
    format!("{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0", SESSION_COOKIE)
}
