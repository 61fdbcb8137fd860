//! Player domain module
//!
//! Players belong to exactly one team. A team's roster is capped at
//! [`ROSTER_CAPACITY`] players.

mod entity;
mod repository;
mod validation;

pub use entity::{Gender, Player, PlayerDraft, PlayerId, Rank, Role};
pub use repository::PlayerRepository;
pub use validation::PlayerValidationError;

/// Maximum number of players a team may register
pub const ROSTER_CAPACITY: usize = 5;
