//! Team infrastructure implementations

mod repository;
mod service;

pub use repository::InMemoryTeamRepository;
pub use service::{CreateTeamRequest, TeamService};
