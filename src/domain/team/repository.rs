//! Team repository trait

use async_trait::async_trait;

use super::entity::{Team, TeamDraft, TeamId};
use crate::domain::DomainError;

/// Repository owning the registered teams
///
/// Implementations allocate the team id themselves so that an id is only
/// consumed by a record that is actually stored.
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by ID
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError>;

    /// Store a validated draft under a freshly allocated id
    async fn create(&self, draft: TeamDraft) -> Result<Team, DomainError>;

    /// List all teams in creation order
    async fn list(&self) -> Result<Vec<Team>, DomainError>;

    /// Count registered teams
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a team exists
    async fn exists(&self, id: TeamId) -> Result<bool, DomainError>;
}
