//! Team domain module
//!
//! Teams are the registration unit of the tournament. A team is created once
//! and never edited or removed; players reference it by id.

mod entity;
mod repository;
mod validation;

pub use entity::{Team, TeamDraft, TeamId};
pub use repository::TeamRepository;
pub use validation::TeamValidationError;
