//! Gated registry - the entry point the HTTP layer talks to
//!
//! Every operation authorizes the caller's session before touching a store.

use std::sync::Arc;

use serde::Serialize;

use super::projection::{RegistrationOptions, RosterProjection, TeamRoster, TeamRosterSummary};
use crate::domain::player::Player;
use crate::domain::session::SessionToken;
use crate::domain::team::{Team, TeamId};
use crate::domain::DomainError;
use crate::infrastructure::player::{CreatePlayerRequest, PlayerService};
use crate::infrastructure::session::SessionGate;
use crate::infrastructure::team::{CreateTeamRequest, TeamService};

/// Registry totals, readable without a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub teams: usize,
    pub players: usize,
}

#[derive(Debug)]
pub struct GatedRegistry {
    gate: Arc<SessionGate>,
    teams: Arc<TeamService>,
    players: Arc<PlayerService>,
    projection: RosterProjection,
}

impl GatedRegistry {
    pub fn new(
        gate: Arc<SessionGate>,
        teams: Arc<TeamService>,
        players: Arc<PlayerService>,
    ) -> Self {
        let projection = RosterProjection::new(Arc::clone(&teams), Arc::clone(&players));

        Self {
            gate,
            teams,
            players,
            projection,
        }
    }

    pub async fn create_team(
        &self,
        token: &SessionToken,
        request: CreateTeamRequest,
    ) -> Result<Team, DomainError> {
        self.gate.authorize(token).await?;
        self.teams.create(request).await
    }

    pub async fn list_teams(&self, token: &SessionToken) -> Result<Vec<Team>, DomainError> {
        self.gate.authorize(token).await?;
        self.teams.list().await
    }

    pub async fn get_team(&self, token: &SessionToken, id: TeamId) -> Result<Team, DomainError> {
        self.gate.authorize(token).await?;
        self.teams.require(id).await
    }

    pub async fn create_player(
        &self,
        token: &SessionToken,
        request: CreatePlayerRequest,
    ) -> Result<Player, DomainError> {
        self.gate.authorize(token).await?;
        self.players.create(request).await
    }

    /// Players of one team; an unknown team is `NotFound`
    pub async fn list_players_by_team(
        &self,
        token: &SessionToken,
        team_id: TeamId,
    ) -> Result<Vec<Player>, DomainError> {
        self.gate.authorize(token).await?;
        self.teams.require(team_id).await?;
        self.players.list_by_team(team_id).await
    }

    /// Player count of one team; an unknown team is `NotFound`
    pub async fn count_players_by_team(
        &self,
        token: &SessionToken,
        team_id: TeamId,
    ) -> Result<usize, DomainError> {
        self.gate.authorize(token).await?;
        self.teams.require(team_id).await?;
        self.players.count_by_team(team_id).await
    }

    pub async fn teams_with_player_counts(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<TeamRosterSummary>, DomainError> {
        self.gate.authorize(token).await?;
        self.projection.teams_with_player_counts().await
    }

    pub async fn roster_by_team(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<TeamRoster>, DomainError> {
        self.gate.authorize(token).await?;
        self.projection.roster_by_team().await
    }

    pub async fn registration_options(
        &self,
        token: &SessionToken,
    ) -> Result<RegistrationOptions, DomainError> {
        self.gate.authorize(token).await?;
        self.projection.registration_options().await
    }

    pub async fn stats(&self) -> Result<RegistryStats, DomainError> {
        Ok(RegistryStats {
            teams: self.teams.count().await?,
            players: self.players.count().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::domain::identity::IdentityAllocator;
    use crate::domain::session::mock::ManualClock;
    use crate::infrastructure::player::InMemoryPlayerRepository;
    use crate::infrastructure::session::{Credentials, InMemorySessionRepository};
    use crate::infrastructure::team::InMemoryTeamRepository;

    struct Fixture {
        clock: Arc<ManualClock>,
        gate: Arc<SessionGate>,
        registry: GatedRegistry,
    }

    fn fixture() -> Fixture {
        let ids = Arc::new(IdentityAllocator::new());
        let team_repo = Arc::new(InMemoryTeamRepository::new(Arc::clone(&ids)));
        let player_repo = Arc::new(InMemoryPlayerRepository::new(ids));
        let clock = Arc::new(ManualClock::new());

        let gate = Arc::new(
            SessionGate::new(
                Arc::new(InMemorySessionRepository::new()),
                Credentials::new("admin", "12345", "Admin").unwrap(),
                Duration::minutes(30),
                clock.clone(),
            )
            .unwrap(),
        );
        let teams = Arc::new(TeamService::new(team_repo.clone()));
        let players = Arc::new(PlayerService::new(player_repo, team_repo));

        Fixture {
            clock,
            gate: gate.clone(),
            registry: GatedRegistry::new(gate, teams, players),
        }
    }

    async fn login(f: &Fixture) -> SessionToken {
        f.gate.authenticate("admin", "12345").await.unwrap().token
    }

    fn alpha() -> CreateTeamRequest {
        CreateTeamRequest {
            name: "Alpha".to_string(),
            captain_name: "Cap1".to_string(),
            contact: "999".to_string(),
        }
    }

    fn player(nickname: &str, team_id: &str) -> CreatePlayerRequest {
        CreatePlayerRequest {
            name: "Player".to_string(),
            nickname: nickname.to_string(),
            role: "mid".to_string(),
            rank: "gold".to_string(),
            gender: "other".to_string(),
            team_id: team_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_every_operation_requires_session() {
        let f = fixture();
        let anonymous = SessionToken::new("rs_nobody");
        let team = TeamId::new(1);

        let denied = |r: Result<(), DomainError>| {
            assert!(matches!(r, Err(DomainError::Unauthorized { .. })));
        };

        denied(f.registry.create_team(&anonymous, alpha()).await.map(|_| ()));
        denied(f.registry.list_teams(&anonymous).await.map(|_| ()));
        denied(f.registry.get_team(&anonymous, team).await.map(|_| ()));
        denied(f.registry.create_player(&anonymous, player("p", "1")).await.map(|_| ()));
        denied(f.registry.list_players_by_team(&anonymous, team).await.map(|_| ()));
        denied(f.registry.count_players_by_team(&anonymous, team).await.map(|_| ()));
        denied(f.registry.teams_with_player_counts(&anonymous).await.map(|_| ()));
        denied(f.registry.roster_by_team(&anonymous).await.map(|_| ()));
        denied(f.registry.registration_options(&anonymous).await.map(|_| ()));

        assert_eq!(
            f.registry.stats().await.unwrap(),
            RegistryStats { teams: 0, players: 0 }
        );
    }

    #[tokio::test]
    async fn test_denied_call_does_not_mutate() {
        let f = fixture();
        let token = login(&f).await;
        f.registry.create_team(&token, alpha()).await.unwrap();

        f.gate.terminate(&token).await.unwrap();
        let result = f.registry.create_player(&token, player("p", "1")).await;
        assert!(matches!(result, Err(DomainError::Unauthorized { .. })));
        assert_eq!(f.registry.stats().await.unwrap().players, 0);
    }

    #[tokio::test]
    async fn test_alpha_scenario_through_registry() {
        let f = fixture();
        let token = login(&f).await;

        let team = f.registry.create_team(&token, alpha()).await.unwrap();
        assert_eq!(team.id(), TeamId::new(1));

        let fetched = f.registry.get_team(&token, team.id()).await.unwrap();
        assert_eq!(fetched.name(), "Alpha");
        assert_eq!(fetched.captain_name(), "Cap1");
        assert_eq!(fetched.contact(), "999");

        for i in 1..=5u64 {
            let p = f
                .registry
                .create_player(&token, player(&format!("p{}", i), "1"))
                .await
                .unwrap();
            assert_eq!(p.id().value(), i);
        }

        let sixth = f.registry.create_player(&token, player("p6", "1")).await;
        assert!(matches!(sixth, Err(DomainError::CapacityExceeded { .. })));

        let summaries = f.registry.teams_with_player_counts(&token).await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].team.name(), "Alpha");
        assert_eq!(summaries[0].player_count, 5);

        assert_eq!(
            f.registry.count_players_by_team(&token, team.id()).await.unwrap(),
            5
        );
        assert_eq!(
            f.registry.stats().await.unwrap(),
            RegistryStats { teams: 1, players: 5 }
        );
    }

    #[tokio::test]
    async fn test_unknown_team_lookups() {
        let f = fixture();
        let token = login(&f).await;
        let ghost = TeamId::new(42);

        assert!(matches!(
            f.registry.get_team(&token, ghost).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            f.registry.list_players_by_team(&token, ghost).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            f.registry.count_players_by_team(&token, ghost).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            f.registry.create_player(&token, player("p", "42")).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_idle_session_is_denied() {
        let f = fixture();
        let token = login(&f).await;

        f.clock.advance(Duration::minutes(29));
        assert!(f.registry.list_teams(&token).await.is_ok());

        f.clock.advance(Duration::minutes(31));
        assert!(matches!(
            f.registry.list_teams(&token).await,
            Err(DomainError::Unauthorized { .. })
        ));
    }

    #[tokio::test]
    async fn test_registration_options_lists_teams() {
        let f = fixture();
        let token = login(&f).await;
        f.registry.create_team(&token, alpha()).await.unwrap();

        let options = f.registry.registration_options(&token).await.unwrap();
        assert_eq!(options.teams.len(), 1);
        assert_eq!(options.roles.len(), 5);
    }
}
