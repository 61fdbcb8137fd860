//! In-memory team repository implementation

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::identity::{EntityKind, IdentityAllocator};
use crate::domain::team::{Team, TeamDraft, TeamId, TeamRepository};
use crate::domain::DomainError;

/// In-memory implementation of TeamRepository
///
/// Teams are keyed by id; ids grow with every insert, so key order is
/// creation order.
#[derive(Debug)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<BTreeMap<TeamId, Team>>>,
    ids: Arc<IdentityAllocator>,
}

impl InMemoryTeamRepository {
    /// Create an empty repository drawing ids from `ids`
    pub fn new(ids: Arc<IdentityAllocator>) -> Self {
        Self {
            teams: Arc::new(RwLock::new(BTreeMap::new())),
            ids,
        }
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.get(&id).cloned())
    }

    async fn create(&self, draft: TeamDraft) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;

        let id = TeamId::new(self.ids.next_id(EntityKind::Team));

        if teams.contains_key(&id) {
            return Err(DomainError::internal(format!(
                "Team id {} was allocated twice",
                id
            )));
        }

        let team = draft.into_team(id);
        teams.insert(id, team.clone());

        Ok(team)
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.len())
    }

    async fn exists(&self, id: TeamId) -> Result<bool, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.contains_key(&id))
    }
}
