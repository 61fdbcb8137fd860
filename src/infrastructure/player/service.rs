//! Player service for roster registration

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::player::{Player, PlayerDraft, PlayerRepository, ROSTER_CAPACITY};
use crate::domain::team::{TeamId, TeamRepository};
use crate::domain::DomainError;

/// Request for registering a player, raw form values
#[derive(Debug, Clone)]
pub struct CreatePlayerRequest {
    pub name: String,
    pub nickname: String,
    pub role: String,
    pub rank: String,
    pub gender: String,
    pub team_id: String,
}

/// Roster ledger
#[derive(Debug)]
pub struct PlayerService {
    players: Arc<dyn PlayerRepository>,
    teams: Arc<dyn TeamRepository>,
}

impl PlayerService {
    /// Create a new player service
    pub fn new(players: Arc<dyn PlayerRepository>, teams: Arc<dyn TeamRepository>) -> Self {
        Self { players, teams }
    }

    /// Register a player on an existing team with a free roster slot
    ///
    /// The team reference is resolved before the remaining fields are
    /// validated, so an unknown team is reported as `NotFound` whatever the
    /// other fields hold.
    pub async fn create(&self, request: CreatePlayerRequest) -> Result<Player, DomainError> {
        let team_id = TeamId::parse(&request.team_id)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if !self.teams.exists(team_id).await? {
            return Err(DomainError::not_found(format!("Team {} not found", team_id)));
        }

        let draft = PlayerDraft::new(
            &request.name,
            &request.nickname,
            &request.role,
            &request.rank,
            &request.gender,
            team_id,
        )
        .map_err(|e| DomainError::validation(e.to_string()))?;

        match self
            .players
            .create_within_capacity(draft, ROSTER_CAPACITY)
            .await
        {
            Ok(player) => {
                info!(
                    id = %player.id(),
                    nickname = %player.nickname(),
                    team_id = %team_id,
                    "Registered player"
                );
                Ok(player)
            }
            Err(e @ DomainError::CapacityExceeded { .. }) => {
                warn!(team_id = %team_id, "Roster full, player rejected");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// List a team's players in creation order
    pub async fn list_by_team(&self, team_id: TeamId) -> Result<Vec<Player>, DomainError> {
        debug!(team_id = %team_id, "Listing roster");
        self.players.list_by_team(team_id).await
    }

    /// List every player in creation order
    pub async fn list(&self) -> Result<Vec<Player>, DomainError> {
        self.players.list().await
    }

    /// Count a team's players
    pub async fn count_by_team(&self, team_id: TeamId) -> Result<usize, DomainError> {
        self.players.count_by_team(team_id).await
    }

    /// Count every registered player
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.players.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::IdentityAllocator;
    use crate::domain::player::{Gender, PlayerId, Rank, Role};
    use crate::domain::team::TeamDraft;
    use crate::infrastructure::player::InMemoryPlayerRepository;
    use crate::infrastructure::team::InMemoryTeamRepository;

    struct Fixture {
        teams: Arc<InMemoryTeamRepository>,
        service: PlayerService,
    }

    fn fixture() -> Fixture {
        let ids = Arc::new(IdentityAllocator::new());
        let teams = Arc::new(InMemoryTeamRepository::new(Arc::clone(&ids)));
        let players = Arc::new(InMemoryPlayerRepository::new(ids));
        let service = PlayerService::new(players, teams.clone());

        Fixture { teams, service }
    }

    async fn add_team(fixture: &Fixture, name: &str) -> TeamId {
        fixture
            .teams
            .create(TeamDraft::new(name, "Captain", "999").unwrap())
            .await
            .unwrap()
            .id()
    }

    fn request(nickname: &str, team_id: &str) -> CreatePlayerRequest {
        CreatePlayerRequest {
            name: "Some Player".to_string(),
            nickname: nickname.to_string(),
            role: "Support".to_string(),
            rank: "Platinum".to_string(),
            gender: "Female".to_string(),
            team_id: team_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_player() {
        let fixture = fixture();
        let team_id = add_team(&fixture, "Alpha").await;

        let player = fixture
            .service
            .create(request(" Keria ", "1"))
            .await
            .unwrap();

        assert_eq!(player.id(), PlayerId::new(1));
        assert_eq!(player.nickname(), "Keria");
        assert_eq!(player.role(), Role::Support);
        assert_eq!(player.rank(), Rank::Platinum);
        assert_eq!(player.gender(), Gender::Female);
        assert_eq!(player.team_id(), team_id);
    }

    #[tokio::test]
    async fn test_full_roster_scenario() {
        let fixture = fixture();
        add_team(&fixture, "Alpha").await;

        for i in 1..=5 {
            let player = fixture
                .service
                .create(request(&format!("p{}", i), "1"))
                .await
                .unwrap();
            assert_eq!(player.id().value(), i);
        }

        let result = fixture.service.create(request("sixth", "1")).await;
        assert!(matches!(
            result,
            Err(DomainError::CapacityExceeded {
                team_id: 1,
                capacity: 5
            })
        ));
        assert_eq!(fixture.service.count_by_team(TeamId::new(1)).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_capacity_rejected_exactly_at_five() {
        let fixture = fixture();
        let team_id = add_team(&fixture, "Alpha").await;

        for i in 0..8 {
            let before = fixture.service.count_by_team(team_id).await.unwrap();
            let result = fixture.service.create(request(&format!("p{}", i), "1")).await;

            if before == ROSTER_CAPACITY {
                assert!(matches!(result, Err(DomainError::CapacityExceeded { .. })));
            } else {
                assert!(result.is_ok());
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_team_is_not_found() {
        let fixture = fixture();

        let result = fixture.service.create(request("ghost", "42")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_unknown_team_wins_over_invalid_fields() {
        let fixture = fixture();

        let mut bad = request("", "42");
        bad.role = "Bench".to_string();

        let result = fixture.service.create(bad).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_team_id_must_be_numeric() {
        let fixture = fixture();
        add_team(&fixture, "Alpha").await;

        for raw in ["", "  ", "abc", "0", "-1"] {
            let result = fixture.service.create(request("p", raw)).await;
            assert!(
                matches!(result, Err(DomainError::Validation { .. })),
                "team id {:?} should be rejected",
                raw
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_enumerations_rejected() {
        let fixture = fixture();
        add_team(&fixture, "Alpha").await;

        let mut bad_role = request("p", "1");
        bad_role.role = "Atirador".to_string();
        let mut bad_rank = request("p", "1");
        bad_rank.rank = "Wood".to_string();
        let mut bad_gender = request("p", "1");
        bad_gender.gender = String::new();

        for bad in [bad_role, bad_rank, bad_gender] {
            let result = fixture.service.create(bad).await;
            assert!(matches!(result, Err(DomainError::Validation { .. })));
        }

        assert_eq!(fixture.service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_by_team() {
        let fixture = fixture();
        let alpha = add_team(&fixture, "Alpha").await;
        let beta = add_team(&fixture, "Beta").await;

        fixture.service.create(request("a1", "1")).await.unwrap();
        fixture.service.create(request("b1", "2")).await.unwrap();
        fixture.service.create(request("a2", "1")).await.unwrap();

        let alpha_roster = fixture.service.list_by_team(alpha).await.unwrap();
        assert_eq!(alpha_roster.len(), 2);
        assert_eq!(alpha_roster[0].nickname(), "a1");
        assert_eq!(alpha_roster[1].nickname(), "a2");

        assert_eq!(fixture.service.count_by_team(beta).await.unwrap(), 1);
        assert!(fixture
            .service
            .list_by_team(TeamId::new(99))
            .await
            .unwrap()
            .is_empty());
    }
}
