//! Session store trait

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::entity::Session;
use crate::domain::DomainError;

/// Store of live sessions, keyed by the digest of the session token
#[async_trait]
pub trait SessionRepository: Send + Sync + std::fmt::Debug {
    /// Store a session, replacing any previous one under the same key
    async fn insert(&self, key: String, session: Session) -> Result<(), DomainError>;

    /// Get a session by key
    async fn get(&self, key: &str) -> Result<Option<Session>, DomainError>;

    /// Record activity and return the refreshed session
    async fn touch(&self, key: &str, at: DateTime<Utc>) -> Result<Option<Session>, DomainError>;

    /// Remove a session, returns true if it existed
    async fn remove(&self, key: &str) -> Result<bool, DomainError>;

    /// Remove every session idle for longer than `idle_window` at `now`
    async fn remove_idle(
        &self,
        now: DateTime<Utc>,
        idle_window: Duration,
    ) -> Result<usize, DomainError>;

    /// Count stored sessions, expired ones included
    async fn count(&self) -> Result<usize, DomainError>;
}
