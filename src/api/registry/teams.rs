//! Team endpoints

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parse_team_id;
use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::team::Team;
use crate::infrastructure::team::CreateTeamRequest;

/// Missing fields arrive as empty strings and fail validation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamApiRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub captain_name: String,
    #[serde(default)]
    pub contact: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: u64,
    pub name: String,
    pub captain_name: String,
    pub contact: String,
    pub created_at: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().value(),
            name: team.name().to_string(),
            captain_name: team.captain_name().to_string(),
            contact: team.contact().to_string(),
            created_at: team.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListTeamsResponse {
    pub teams: Vec<TeamResponse>,
    pub total: usize,
}

/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    RequireSession { token, .. }: RequireSession,
    Json(request): Json<CreateTeamApiRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(name = %request.name, "Creating team");

    let team = state
        .registry
        .create_team(
            &token,
            CreateTeamRequest {
                name: request.name,
                captain_name: request.captain_name,
                contact: request.contact,
            },
        )
        .await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// GET /api/teams
pub async fn list_teams(
    State(state): State<AppState>,
    RequireSession { token, .. }: RequireSession,
) -> Result<Json<ListTeamsResponse>, ApiError> {
    debug!("Listing teams");

    let teams: Vec<TeamResponse> = state
        .registry
        .list_teams(&token)
        .await?
        .iter()
        .map(TeamResponse::from)
        .collect();
    let total = teams.len();

    Ok(Json(ListTeamsResponse { teams, total }))
}

/// GET /api/teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    RequireSession { token, .. }: RequireSession,
    Path(team_id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(team_id = %team_id, "Getting team");

    let team = state
        .registry
        .get_team(&token, parse_team_id(&team_id)?)
        .await?;

    Ok(Json(TeamResponse::from(&team)))
}
