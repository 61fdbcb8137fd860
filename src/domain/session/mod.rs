//! Session domain module
//!
//! Sessions are ephemeral login state keyed by a server-issued token. They
//! are not registry entities and never outlive the process.

mod clock;
mod entity;
mod repository;

pub use clock::{Clock, SystemClock};
pub use entity::{Session, SessionToken};
pub use repository::SessionRepository;

#[cfg(test)]
pub use clock::mock;
