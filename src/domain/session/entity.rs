//! Session entity and token

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Opaque bearer token identifying a session
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

/// Login state of one caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    display_name: String,
    logged_in: bool,
    created_at: DateTime<Utc>,
    last_seen_at: DateTime<Utc>,
}

impl Session {
    /// Create an authenticated session
    pub fn authenticated(display_name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            display_name: display_name.into(),
            logged_in: true,
            created_at: now,
            last_seen_at: now,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_seen_at(&self) -> DateTime<Utc> {
        self.last_seen_at
    }

    /// True once more than `idle_window` has elapsed since the last activity
    pub fn is_idle_expired(&self, now: DateTime<Utc>, idle_window: Duration) -> bool {
        now - self.last_seen_at > idle_window
    }

    /// Record activity at `now`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.last_seen_at {
            self.last_seen_at = now;
        }
    }
}
