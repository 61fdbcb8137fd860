//! Player repository trait

use async_trait::async_trait;

use super::entity::{Player, PlayerDraft};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Repository owning the registered players
#[async_trait]
pub trait PlayerRepository: Send + Sync + std::fmt::Debug {
    /// Store a draft unless its team already holds `capacity` players
    ///
    /// Counting the roster, allocating the id and inserting the record happen
    /// under one exclusive lock. Fails with `DomainError::CapacityExceeded`
    /// when the roster is full; no id is consumed in that case.
    async fn create_within_capacity(
        &self,
        draft: PlayerDraft,
        capacity: usize,
    ) -> Result<Player, DomainError>;

    /// List the players of a team in creation order
    async fn list_by_team(&self, team_id: TeamId) -> Result<Vec<Player>, DomainError>;

    /// List every player in creation order
    async fn list(&self) -> Result<Vec<Player>, DomainError>;

    /// Count the players of a team
    async fn count_by_team(&self, team_id: TeamId) -> Result<usize, DomainError>;

    /// Count every registered player
    async fn count(&self) -> Result<usize, DomainError>;
}
