//! Login, logout and session info endpoints

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::session::{expired_session_cookie, session_cookie};
use crate::api::middleware::{RequireSession, SessionCredential};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::session::Session;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(get_current_session))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub display_name: String,
    pub idle_timeout_seconds: i64,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
    pub session_closed: bool,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub display_name: String,
    pub logged_in: bool,
    pub created_at: String,
    pub last_seen_at: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            display_name: session.display_name().to_string(),
            logged_in: session.is_logged_in(),
            created_at: session.created_at().to_rfc3339(),
            last_seen_at: session.last_seen_at().to_rfc3339(),
        }
    }
}

/// POST /auth/login
///
/// Returns the session token in the body and as the `roster_session` cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let login = state
        .session_gate
        .authenticate(&request.username, &request.password)
        .await?;

    let idle_timeout_seconds = state.session_gate.idle_window().num_seconds();
    let cookie = session_cookie(&login.token, idle_timeout_seconds);

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(LoginResponse {
            token: login.token.as_str().to_string(),
            display_name: login.session.display_name().to_string(),
            idle_timeout_seconds,
        }),
    ))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    SessionCredential(token): SessionCredential,
) -> Result<impl IntoResponse, ApiError> {
    let session_closed = state.session_gate.terminate(&token).await?;

    Ok((
        AppendHeaders([(SET_COOKIE, expired_session_cookie())]),
        Json(LogoutResponse {
            message: "Logged out successfully".to_string(),
            session_closed,
        }),
    ))
}

/// GET /auth/me
pub async fn get_current_session(
    RequireSession { session, .. }: RequireSession,
) -> Result<Json<SessionResponse>, ApiError> {
    debug!("Resolving current session");

    Ok(Json(SessionResponse::from(&session)))
}
