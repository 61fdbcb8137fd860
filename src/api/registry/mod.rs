//! Registry endpoints, all behind a session

pub mod players;
pub mod roster;
pub mod teams;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;
use super::types::ApiError;
use crate::domain::team::TeamId;

pub fn create_registry_router() -> Router<AppState> {
    Router::new()
        .route("/teams", post(teams::create_team).get(teams::list_teams))
        .route("/teams/{team_id}", get(teams::get_team))
        .route("/teams/{team_id}/players", get(players::list_team_players))
        .route("/teams/{team_id}/players/count", get(players::count_team_players))
        .route("/players", post(players::create_player))
        .route("/players/options", get(players::registration_options))
        .route("/roster", get(roster::roster_by_team))
        .route("/roster/summary", get(roster::roster_summary))
}

/// Parse a `{team_id}` path segment
pub(crate) fn parse_team_id(raw: &str) -> Result<TeamId, ApiError> {
    TeamId::parse(raw).map_err(|e| ApiError::bad_request(e.to_string()).with_param("team_id"))
}
