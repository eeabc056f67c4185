//! Repository trait for timetable storage.
//!
//! The repository is the engine's transactional boundary: the conflict
//! check and the write it gates must execute as one atomic unit inside the
//! implementation, so two concurrent candidates that would collide can
//! never both commit.

use async_trait::async_trait;

use crate::api::{BatchId, EntryId, TeacherId};
use crate::error::TimetableResult;
use crate::models::{EntryChanges, EntryDraft, TimetableEntry};
use crate::services::conflicts::ConflictReport;

/// Storage abstraction for timetable entries.
///
/// Listing methods return **active** entries only, ordered by
/// `(day_of_week ascending, start_time ascending)`. That ordering is a
/// public contract consumed by the aggregator and by UI rendering.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TimetableRepository: Send + Sync {
    /// Check if the backing store is reachable and healthy.
    async fn health_check(&self) -> TimetableResult<bool>;

    // ==================== Conflict-gated writes ====================

    /// Insert a candidate entry if it collides with nothing.
    ///
    /// The conflict query and the insert run as one atomic unit: of any two
    /// concurrently submitted candidates that would conflict with each
    /// other, at most one succeeds and the loser observes
    /// [`TimetableError::Conflict`](crate::error::TimetableError::Conflict)
    /// referencing the winner.
    ///
    /// # Returns
    /// * `Ok(TimetableEntry)` - The created entry with its assigned id
    /// * `Err(TimetableError::Conflict)` - Candidate overlaps active entries
    async fn insert_if_no_conflict(&self, draft: EntryDraft) -> TimetableResult<TimetableEntry>;

    /// Apply changes to an active entry, re-validating the merged result as
    /// if it were a new candidate. The entry's own prior state is excluded
    /// from the conflict scope. Same atomicity as
    /// [`insert_if_no_conflict`](Self::insert_if_no_conflict).
    ///
    /// # Returns
    /// * `Ok(TimetableEntry)` - The updated entry
    /// * `Err(TimetableError::NotFound)` - `id` is not an active entry
    /// * `Err(TimetableError::Conflict)` - Merged candidate overlaps
    async fn update_if_no_conflict(
        &self,
        id: EntryId,
        changes: EntryChanges,
    ) -> TimetableResult<TimetableEntry>;

    /// Soft-delete an entry. Idempotent: deactivating an already-inactive
    /// entry is a no-op. Entries are never physically removed.
    ///
    /// # Returns
    /// * `Err(TimetableError::NotFound)` - `id` was never assigned
    async fn deactivate(&self, id: EntryId) -> TimetableResult<()>;

    // ==================== Reads ====================

    /// Fetch one entry by id, active or not (audit access).
    async fn get_entry(&self, id: EntryId) -> TimetableResult<TimetableEntry>;

    /// Advisory conflict check: what would collide if this draft were
    /// committed right now. Reserves nothing; a subsequent insert re-checks
    /// under the write lock.
    async fn check_conflicts(
        &self,
        draft: &EntryDraft,
        exclude: Option<EntryId>,
    ) -> TimetableResult<ConflictReport>;

    /// Active entries for a batch, `(day, start)` ordered.
    async fn find_by_batch(&self, batch_id: BatchId) -> TimetableResult<Vec<TimetableEntry>>;

    /// Active entries for a teacher, `(day, start)` ordered.
    async fn find_by_teacher(&self, teacher_id: TeacherId)
        -> TimetableResult<Vec<TimetableEntry>>;

    /// Active entries for any of the given batches, `(day, start)` ordered.
    /// Used by level-scoped listings after the roster join.
    async fn find_by_batches(&self, batch_ids: &[BatchId])
        -> TimetableResult<Vec<TimetableEntry>>;

    /// All active entries, `(day, start)` ordered.
    async fn list_active(&self) -> TimetableResult<Vec<TimetableEntry>>;
}
