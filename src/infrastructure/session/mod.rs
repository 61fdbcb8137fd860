//! Session infrastructure: token issuing, the in-memory store and the gate

mod gate;
mod repository;
mod token;

pub use gate::{Credentials, Login, SessionGate};
pub use repository::InMemorySessionRepository;
pub use token::{IssuedToken, SessionTokenGenerator};
