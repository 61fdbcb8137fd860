//! API middleware and extractors

pub mod logging;
pub mod session;

pub use logging::logging_middleware;
pub use session::{RequireSession, SessionCredential, SESSION_COOKIE};
