//! Player endpoints

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parse_team_id;
use super::teams::TeamResponse;
use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::player::{Gender, Player, Rank, Role, ROSTER_CAPACITY};
use crate::infrastructure::player::CreatePlayerRequest;

/// Team reference as sent by a client, number or string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TeamRef {
    Number(u64),
    Text(String),
}

impl Default for TeamRef {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl TeamRef {
    fn into_raw(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlayerApiRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub team_id: TeamRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerResponse {
    pub id: u64,
    pub name: String,
    pub nickname: String,
    pub role: Role,
    pub rank: Rank,
    pub gender: Gender,
    pub team_id: u64,
    pub created_at: String,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().value(),
            name: player.name().to_string(),
            nickname: player.nickname().to_string(),
            role: player.role(),
            rank: player.rank(),
            gender: player.gender(),
            team_id: player.team_id().value(),
            created_at: player.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListPlayersResponse {
    pub team_id: u64,
    pub players: Vec<PlayerResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerCountResponse {
    pub team_id: u64,
    pub player_count: usize,
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationOptionsResponse {
    pub roles: Vec<Role>,
    pub ranks: Vec<Rank>,
    pub genders: Vec<Gender>,
    pub teams: Vec<TeamResponse>,
}

/// POST /api/players
pub async fn create_player(
    State(state): State<AppState>,
    RequireSession { token, .. }: RequireSession,
    Json(request): Json<CreatePlayerApiRequest>,
) -> Result<Json<PlayerResponse>, ApiError> {
    debug!(nickname = %request.nickname, "Registering player");

    let player = state
        .registry
        .create_player(
            &token,
            CreatePlayerRequest {
                name: request.name,
                nickname: request.nickname,
                role: request.role,
                rank: request.rank,
                gender: request.gender,
                team_id: request.team_id.into_raw(),
            },
        )
        .await?;

    Ok(Json(PlayerResponse::from(&player)))
}

/// GET /api/teams/{team_id}/players
pub async fn list_team_players(
    State(state): State<AppState>,
    RequireSession { token, .. }: RequireSession,
    Path(team_id): Path<String>,
) -> Result<Json<ListPlayersResponse>, ApiError> {
    let team_id = parse_team_id(&team_id)?;

    let players: Vec<PlayerResponse> = state
        .registry
        .list_players_by_team(&token, team_id)
        .await?
        .iter()
        .map(PlayerResponse::from)
        .collect();
    let total = players.len();

    Ok(Json(ListPlayersResponse {
        team_id: team_id.value(),
        players,
        total,
    }))
}

/// GET /api/teams/{team_id}/players/count
pub async fn count_team_players(
    State(state): State<AppState>,
    RequireSession { token, .. }: RequireSession,
    Path(team_id): Path<String>,
) -> Result<Json<PlayerCountResponse>, ApiError> {
    let team_id = parse_team_id(&team_id)?;
    let player_count = state.registry.count_players_by_team(&token, team_id).await?;

    Ok(Json(PlayerCountResponse {
        team_id: team_id.value(),
        player_count,
        capacity: ROSTER_CAPACITY,
    }))
}

/// GET /api/players/options
pub async fn registration_options(
    State(state): State<AppState>,
    RequireSession { token, .. }: RequireSession,
) -> Result<Json<RegistrationOptionsResponse>, ApiError> {
    let options = state.registry.registration_options(&token).await?;

    Ok(Json(RegistrationOptionsResponse {
        roles: options.roles,
        ranks: options.ranks,
        genders: options.genders,
        teams: options.teams.iter().map(TeamResponse::from).collect(),
    }))
}
