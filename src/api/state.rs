//! Shared application state

use std::sync::Arc;

use crate::infrastructure::roster::GatedRegistry;
use crate::infrastructure::session::SessionGate;

/// Handles every handler needs; cheap to clone
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<GatedRegistry>,
    pub session_gate: Arc<SessionGate>,
}

impl AppState {
    pub fn new(registry: Arc<GatedRegistry>, session_gate: Arc<SessionGate>) -> Self {
        Self {
            registry,
            session_gate,
        }
    }
}
