//! In-memory session store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::domain::session::{Session, SessionRepository};
use crate::domain::DomainError;

/// In-memory implementation of SessionRepository
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, key: String, session: Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(key, session);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(key).cloned())
    }

    async fn touch(&self, key: &str, at: DateTime<Utc>) -> Result<Option<Session>, DomainError> {
        let mut sessions = self.sessions.write().await;

        Ok(sessions.get_mut(key).map(|session| {
            session.touch(at);
            session.clone()
        }))
    }

    async fn remove(&self, key: &str) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(key).is_some())
    }

    async fn remove_idle(
        &self,
        now: DateTime<Utc>,
        idle_window: Duration,
    ) -> Result<usize, DomainError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, session| !session.is_idle_expired(now, idle_window));

        Ok(before - sessions.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.len())
    }
}
