//! Session gate - login, authorization and logout
//!
//! Session lifecycle:
//!
//! ```text
//! Anonymous --(valid credentials)--> Authenticated --(logout | idle timeout)--> Anonymous
//! ```
//!
//! Idle expiry is checked when a session is presented; nothing runs in the
//! background.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, warn};

use super::token::{constant_time_compare, digest, SessionTokenGenerator};
use crate::domain::session::{Clock, Session, SessionRepository, SessionToken};
use crate::domain::DomainError;

const INVALID_CREDENTIALS: &str = "Invalid username or password";
const SESSION_REQUIRED: &str = "Login required: session is missing or has expired";

/// The single accepted credential pair
#[derive(Clone)]
pub struct Credentials {
    username_digest: String,
    password_digest: String,
    display_name: String,
}

impl Credentials {
    /// Build the credential pair, rejecting blank values
    pub fn new(
        username: &str,
        password: &str,
        display_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if username.trim().is_empty() {
            return Err(DomainError::configuration("auth.username cannot be empty"));
        }

        if password.is_empty() {
            return Err(DomainError::configuration("auth.password cannot be empty"));
        }

        let display_name = display_name.into();
        let display_name = if display_name.trim().is_empty() {
            username.trim().to_string()
        } else {
            display_name
        };

        Ok(Self {
            username_digest: digest(username),
            password_digest: digest(password),
            display_name,
        })
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Both halves are always compared so a wrong username and a wrong
    /// password take the same path.
    fn matches(&self, username: &str, password: &str) -> bool {
        let username_ok = constant_time_compare(&digest(username), &self.username_digest);
        let password_ok = constant_time_compare(&digest(password), &self.password_digest);
        username_ok & password_ok
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct Login {
    pub token: SessionToken,
    pub session: Session,
}

/// Capability check in front of every registry operation
#[derive(Debug)]
pub struct SessionGate {
    sessions: Arc<dyn SessionRepository>,
    credentials: Credentials,
    idle_window: Duration,
    clock: Arc<dyn Clock>,
    tokens: SessionTokenGenerator,
}

impl SessionGate {
    /// Create a gate; the idle window must be positive
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        credentials: Credentials,
        idle_window: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DomainError> {
        if idle_window <= Duration::zero() {
            return Err(DomainError::configuration(
                "Session idle window must be positive",
            ));
        }

        Ok(Self {
            sessions,
            credentials,
            idle_window,
            clock,
            tokens: SessionTokenGenerator::default(),
        })
    }

    pub fn idle_window(&self) -> Duration {
        self.idle_window
    }

    /// Check credentials and open a session
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Login, DomainError> {
        if !self.credentials.matches(username, password) {
            warn!("Rejected login attempt");
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS));
        }

        let now = self.clock.now();

        let purged = self.sessions.remove_idle(now, self.idle_window).await?;
        if purged > 0 {
            debug!(purged = %purged, "Purged idle sessions");
        }

        let issued = self.tokens.issue();
        let session = Session::authenticated(self.credentials.display_name(), now);
        self.sessions
            .insert(issued.store_key, session.clone())
            .await?;

        info!(display_name = %session.display_name(), "Session opened");

        Ok(Login {
            token: issued.token,
            session,
        })
    }

    /// Allow the call iff the token names a live, logged-in session
    ///
    /// An allowed call refreshes the idle window. Expired sessions are
    /// dropped on sight.
    pub async fn authorize(&self, token: &SessionToken) -> Result<Session, DomainError> {
        let key = self.tokens.store_key(token);
        let now = self.clock.now();

        let Some(session) = self.sessions.get(&key).await? else {
            debug!("Unknown session token");
            return Err(DomainError::unauthorized(SESSION_REQUIRED));
        };

        if !session.is_logged_in() || session.is_idle_expired(now, self.idle_window) {
            self.sessions.remove(&key).await?;
            debug!("Session expired");
            return Err(DomainError::unauthorized(SESSION_REQUIRED));
        }

        self.sessions
            .touch(&key, now)
            .await?
            .ok_or_else(|| DomainError::unauthorized(SESSION_REQUIRED))
    }

    /// Close a session immediately, returns whether it existed
    pub async fn terminate(&self, token: &SessionToken) -> Result<bool, DomainError> {
        let removed = self.sessions.remove(&self.tokens.store_key(token)).await?;

        if removed {
            info!("Session closed");
        }

        Ok(removed)
    }
}
