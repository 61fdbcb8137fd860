//! Domain layer - Core business logic and entities

pub mod error;
pub mod identity;
pub mod player;
pub mod session;
pub mod team;
pub mod validation;

pub use error::DomainError;
pub use identity::{EntityKind, IdentityAllocator};
pub use player::{
    Gender, Player, PlayerDraft, PlayerId, PlayerRepository, PlayerValidationError, Rank, Role,
    ROSTER_CAPACITY,
};
pub use session::{Clock, Session, SessionRepository, SessionToken, SystemClock};
pub use team::{Team, TeamDraft, TeamId, TeamRepository, TeamValidationError};
