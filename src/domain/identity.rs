//! Identity allocation for registry entities
//!
//! Each entity kind has its own process-wide counter. Identifiers start at 1,
//! increase strictly and are never handed out twice. The allocator is an
//! explicit object shared by the repositories, so a fresh allocator gives a
//! fresh id space (one per test, one per process in production).

use std::sync::atomic::{AtomicU64, Ordering};

/// Kind of entity an identifier is allocated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Team,
    Player,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Team => write!(f, "team"),
            Self::Player => write!(f, "player"),
        }
    }
}

/// Monotonic per-kind identifier allocator
#[derive(Debug, Default)]
pub struct IdentityAllocator {
    teams: AtomicU64,
    players: AtomicU64,
}

impl IdentityAllocator {
    /// Create an allocator whose first id for every kind is 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier for the given kind
    pub fn next_id(&self, kind: EntityKind) -> u64 {
        self.counter(kind).fetch_add(1, Ordering::SeqCst) + 1
    }

    fn counter(&self, kind: EntityKind) -> &AtomicU64 {
        match kind {
            EntityKind::Team => &self.teams,
            EntityKind::Player => &self.players,
        }
    }
}
