//! Infrastructure layer - in-memory stores, services and the session gate

pub mod logging;
pub mod player;
pub mod roster;
pub mod session;
pub mod team;
