//! In-memory player repository implementation

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::identity::{EntityKind, IdentityAllocator};
use crate::domain::player::{Player, PlayerDraft, PlayerId, PlayerRepository};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// In-memory implementation of PlayerRepository
#[derive(Debug)]
pub struct InMemoryPlayerRepository {
    players: Arc<RwLock<BTreeMap<PlayerId, Player>>>,
    ids: Arc<IdentityAllocator>,
}

impl InMemoryPlayerRepository {
    /// Create an empty repository drawing ids from `ids`
    pub fn new(ids: Arc<IdentityAllocator>) -> Self {
        Self {
            players: Arc::new(RwLock::new(BTreeMap::new())),
            ids,
        }
    }
}

fn roster_size(players: &BTreeMap<PlayerId, Player>, team_id: TeamId) -> usize {
    players.values().filter(|p| p.team_id() == team_id).count()
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn create_within_capacity(
        &self,
        draft: PlayerDraft,
        capacity: usize,
    ) -> Result<Player, DomainError> {
        // Held until the insert below; a concurrent registration for the
        // same team waits here and then sees the updated count.
        let mut players = self.players.write().await;

        let team_id = draft.team_id();
        if roster_size(&players, team_id) >= capacity {
            return Err(DomainError::capacity_exceeded(team_id.value(), capacity));
        }

        let id = PlayerId::new(self.ids.next_id(EntityKind::Player));
        let player = draft.into_player(id);
        players.insert(id, player.clone());

        Ok(player)
    }

    async fn list_by_team(&self, team_id: TeamId) -> Result<Vec<Player>, DomainError> {
        let players = self.players.read().await;
        Ok(players
            .values()
            .filter(|p| p.team_id() == team_id)
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<Player>, DomainError> {
        let players = self.players.read().await;
        Ok(players.values().cloned().collect())
    }

    async fn count_by_team(&self, team_id: TeamId) -> Result<usize, DomainError> {
        let players = self.players.read().await;
        Ok(roster_size(&players, team_id))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let players = self.players.read().await;
        Ok(players.len())
    }
}
