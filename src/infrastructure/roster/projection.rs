//! Roster projections composed from the team registry and the roster ledger
//!
//! Nothing here writes to either store.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::player::{Gender, Player, Rank, Role, ROSTER_CAPACITY};
use crate::domain::team::{Team, TeamId};
use crate::domain::DomainError;
use crate::infrastructure::player::PlayerService;
use crate::infrastructure::team::TeamService;

/// A team with its roster fill
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRosterSummary {
    pub team: Team,
    pub player_count: usize,
    pub capacity: usize,
}

/// A team with its full roster
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRoster {
    pub team: Team,
    pub players: Vec<Player>,
}

/// Values a registration form may offer
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationOptions {
    pub roles: Vec<Role>,
    pub ranks: Vec<Rank>,
    pub genders: Vec<Gender>,
    pub teams: Vec<Team>,
}

/// Query layer over teams and players
#[derive(Debug)]
pub struct RosterProjection {
    teams: Arc<TeamService>,
    players: Arc<PlayerService>,
}

impl RosterProjection {
    pub fn new(teams: Arc<TeamService>, players: Arc<PlayerService>) -> Self {
        Self { teams, players }
    }

    /// Every team in creation order with its player count
    pub async fn teams_with_player_counts(&self) -> Result<Vec<TeamRosterSummary>, DomainError> {
        let teams = self.teams.list().await?;
        let mut summaries = Vec::with_capacity(teams.len());

        for team in teams {
            let player_count = self.players.count_by_team(team.id()).await?;
            summaries.push(TeamRosterSummary {
                team,
                player_count,
                capacity: ROSTER_CAPACITY,
            });
        }

        Ok(summaries)
    }

    /// Every team in creation order with its players in creation order
    pub async fn roster_by_team(&self) -> Result<Vec<TeamRoster>, DomainError> {
        let teams = self.teams.list().await?;
        let mut grouped: HashMap<TeamId, Vec<Player>> = HashMap::new();

        for player in self.players.list().await? {
            grouped.entry(player.team_id()).or_default().push(player);
        }

        Ok(teams
            .into_iter()
            .map(|team| {
                let players = grouped.remove(&team.id()).unwrap_or_default();
                TeamRoster { team, players }
            })
            .collect())
    }

    /// Enumerated field values and the teams a player can join
    pub async fn registration_options(&self) -> Result<RegistrationOptions, DomainError> {
        Ok(RegistrationOptions {
            roles: Role::ALL.to_vec(),
            ranks: Rank::ALL.to_vec(),
            genders: Gender::ALL.to_vec(),
            teams: self.teams.list().await?,
        })
    }
}
