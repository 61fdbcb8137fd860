//! Read-only roster views and the session-gated registry facade

mod projection;
mod registry;

pub use projection::{RegistrationOptions, RosterProjection, TeamRoster, TeamRosterSummary};
pub use registry::{GatedRegistry, RegistryStats};
