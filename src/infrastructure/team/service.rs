//! Team service for team registration

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::team::{Team, TeamDraft, TeamId, TeamRepository};
use crate::domain::DomainError;

/// Request for registering a new team, raw form values
#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub captain_name: String,
    pub contact: String,
}

/// Team registry
#[derive(Debug)]
pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
}

impl TeamService {
    /// Create a new team service
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    /// Register a new team
    pub async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        let draft = TeamDraft::new(&request.name, &request.captain_name, &request.contact)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let team = self.repository.create(draft).await?;
        info!(id = %team.id(), name = %team.name(), "Registered team");

        Ok(team)
    }

    /// Get a team by ID
    pub async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        debug!(id = %id, "Looking up team");
        self.repository.get(id).await
    }

    /// Get a team by ID, failing with `NotFound` when absent
    pub async fn require(&self, id: TeamId) -> Result<Team, DomainError> {
        self.get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team {} not found", id)))
    }

    /// List all teams in creation order
    pub async fn list(&self) -> Result<Vec<Team>, DomainError> {
        self.repository.list().await
    }

    /// Count teams
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Check if a team exists
    pub async fn exists(&self, id: TeamId) -> Result<bool, DomainError> {
        self.repository.exists(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::IdentityAllocator;
    use crate::infrastructure::team::InMemoryTeamRepository;

    fn create_service() -> TeamService {
        let ids = Arc::new(IdentityAllocator::new());
        TeamService::new(Arc::new(InMemoryTeamRepository::new(ids)))
    }

    fn request(name: &str, captain_name: &str, contact: &str) -> CreateTeamRequest {
        CreateTeamRequest {
            name: name.to_string(),
            captain_name: captain_name.to_string(),
            contact: contact.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_team() {
        let service = create_service();

        let team = service.create(request("Alpha", "Cap1", "999")).await.unwrap();
        assert_eq!(team.id(), TeamId::new(1));
        assert_eq!(team.name(), "Alpha");
        assert_eq!(team.captain_name(), "Cap1");
        assert_eq!(team.contact(), "999");
    }

    #[tokio::test]
    async fn test_create_then_get_returns_trimmed_fields() {
        let service = create_service();

        let created = service
            .create(request("  Alpha Squad ", "\tCap1", "999 "))
            .await
            .unwrap();
        let fetched = service.require(created.id()).await.unwrap();

        assert_eq!(fetched.name(), "Alpha Squad");
        assert_eq!(fetched.captain_name(), "Cap1");
        assert_eq!(fetched.contact(), "999");
    }

    #[tokio::test]
    async fn test_create_team_invalid_fields() {
        let service = create_service();

        for bad in [
            request("", "Cap1", "999"),
            request("Alpha", "  ", "999"),
            request("Alpha", "Cap1", ""),
        ] {
            let result = service.create(bad).await;
            assert!(matches!(result, Err(DomainError::Validation { .. })));
        }

        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rejected_team_does_not_consume_id() {
        let service = create_service();

        service.create(request("", "Cap1", "999")).await.unwrap_err();
        let team = service.create(request("Alpha", "Cap1", "999")).await.unwrap();

        assert_eq!(team.id(), TeamId::new(1));
    }

    #[tokio::test]
    async fn test_ids_strictly_increase() {
        let service = create_service();
        let mut last = 0;

        for i in 0..10 {
            let team = service
                .create(request(&format!("Team {}", i), "Cap", "1"))
                .await
                .unwrap();
            assert!(team.id().value() > last);
            last = team.id().value();
        }
    }

    #[tokio::test]
    async fn test_require_missing_team() {
        let service = create_service();

        let result = service.require(TeamId::new(42)).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert!(service.get(TeamId::new(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_and_exists() {
        let service = create_service();

        service.create(request("Alpha", "A", "1")).await.unwrap();
        service.create(request("Beta", "B", "2")).await.unwrap();

        let teams = service.list().await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name(), "Alpha");
        assert_eq!(teams[1].name(), "Beta");

        assert!(service.exists(TeamId::new(2)).await.unwrap());
        assert!(!service.exists(TeamId::new(3)).await.unwrap());
    }
}
