//! Roster views

use axum::extract::State;
use serde::Serialize;

use super::players::PlayerResponse;
use super::teams::TeamResponse;
use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

#[derive(Debug, Clone, Serialize)]
pub struct TeamRosterResponse {
    pub team: TeamResponse,
    pub players: Vec<PlayerResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    pub teams: Vec<TeamRosterResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamSummaryResponse {
    pub team: TeamResponse,
    pub player_count: usize,
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterSummaryResponse {
    pub teams: Vec<TeamSummaryResponse>,
}

/// GET /api/roster
pub async fn roster_by_team(
    State(state): State<AppState>,
    RequireSession { token, .. }: RequireSession,
) -> Result<Json<RosterResponse>, ApiError> {
    let teams = state
        .registry
        .roster_by_team(&token)
        .await?
        .iter()
        .map(|entry| TeamRosterResponse {
            team: TeamResponse::from(&entry.team),
            players: entry.players.iter().map(PlayerResponse::from).collect(),
        })
        .collect();

    Ok(Json(RosterResponse { teams }))
}

/// GET /api/roster/summary
pub async fn roster_summary(
    State(state): State<AppState>,
    RequireSession { token, .. }: RequireSession,
) -> Result<Json<RosterSummaryResponse>, ApiError> {
    let teams = state
        .registry
        .teams_with_player_counts(&token)
        .await?
        .iter()
        .map(|summary| TeamSummaryResponse {
            team: TeamResponse::from(&summary.team),
            player_count: summary.player_count,
            capacity: summary.capacity,
        })
        .collect();

    Ok(Json(RosterSummaryResponse { teams }))
}
