//! Error types for the scheduling engine.
//!
//! Every fallible operation in the crate returns [`TimetableResult`]. The
//! variants map directly onto the caller-facing taxonomy: validation failures
//! are rejected before any store access, conflicts carry the colliding
//! entries for display, and infrastructure failures propagate unchanged --
//! the engine never retries a conflict-gated write on the caller's behalf.

use crate::services::conflicts::Conflict;

/// Result type for engine operations
pub type TimetableResult<T> = Result<T, TimetableError>;

/// Error type for engine operations
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// Malformed interval, time, or day value. Raised at the boundary,
    /// before the store is consulted.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The candidate overlaps one or more active entries in batch or
    /// teacher scope. Carries every collision found, not just the first.
    #[error("Scheduling conflict with {} active entries", .conflicts.len())]
    Conflict { conflicts: Vec<Conflict> },

    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage or transport failure, surfaced as-is. Retrying is the
    /// caller's responsibility: a blind retry could mask a real conflict.
    #[error("Storage error: {0}")]
    Store(String),
}

impl TimetableError {
    /// Conflicting entries attached to a [`TimetableError::Conflict`],
    /// empty for every other variant.
    pub fn conflicts(&self) -> &[Conflict] {
        match self {
            TimetableError::Conflict { conflicts } => conflicts,
            _ => &[],
        }
    }
}
