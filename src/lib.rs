//! Roster Registry
//!
//! Team and player registration for an amateur esports tournament:
//! - Teams with a captain and a contact
//! - Rosters capped at five players per team
//! - A single operator login gating every registry operation

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{DomainError, IdentityAllocator, SystemClock};
use infrastructure::{
    player::{InMemoryPlayerRepository, PlayerService},
    roster::GatedRegistry,
    session::{Credentials, InMemorySessionRepository, SessionGate},
    team::{InMemoryTeamRepository, TeamService},
};
use tracing::info;

/// Wire the stores, services and the session gate
///
/// Every call yields a fresh, empty registry.
pub fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    config.validate()?;

    let ids = Arc::new(IdentityAllocator::new());
    let team_repository = Arc::new(InMemoryTeamRepository::new(Arc::clone(&ids)));
    let player_repository = Arc::new(InMemoryPlayerRepository::new(ids));

    let teams = Arc::new(TeamService::new(team_repository.clone()));
    let players = Arc::new(PlayerService::new(player_repository, team_repository));

    let credentials = Credentials::new(
        &config.auth.username,
        &config.auth.password,
        config.auth.display_name.clone(),
    )?;
    let session_gate = Arc::new(SessionGate::new(
        Arc::new(InMemorySessionRepository::new()),
        credentials,
        config.auth.idle_window(),
        Arc::new(SystemClock),
    )?);

    let registry = Arc::new(GatedRegistry::new(Arc::clone(&session_gate), teams, players));

    info!(
        idle_timeout_minutes = config.auth.idle_timeout_minutes,
        "Registry initialized"
    );

    Ok(AppState::new(registry, session_gate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state_with_defaults() {
        let state = create_app_state(&AppConfig::default()).unwrap();
        assert_eq!(state.session_gate.idle_window(), chrono::Duration::minutes(30));
    }

    #[test]
    fn test_create_app_state_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.auth.username = " ".to_string();

        assert!(matches!(
            create_app_state(&config),
            Err(DomainError::Configuration { .. })
        ));
    }
}
