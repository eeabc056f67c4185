//! Engine facade composing the store, the conflict detector, and the
//! read-side services behind one public API.
//!
//! Collaborators are injected at construction time. The facade itself is
//! stateless and reentrant: it may be shared behind an `Arc` across any
//! number of concurrent request handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::api::{BatchId, EntryId, LevelId, TeacherId};
use crate::db::repository::TimetableRepository;
use crate::error::{TimetableError, TimetableResult};
use crate::models::{DayOfWeek, EntryChanges, EntryDraft, TimetableEntry};
use crate::services::aggregator::{self, EntrySummary};
use crate::services::calendar::{self, CalendarExport};
use crate::services::conflicts::ConflictReport;
use crate::services::roster::Roster;

/// Public facade over the scheduling engine.
pub struct SchedulingEngine {
    repository: Arc<dyn TimetableRepository>,
    roster: Arc<dyn Roster>,
}

impl SchedulingEngine {
    /// Create an engine over the given store and roster collaborator.
    pub fn new(repository: Arc<dyn TimetableRepository>, roster: Arc<dyn Roster>) -> Self {
        Self { repository, roster }
    }

    /// Check that the backing store is reachable.
    pub async fn health_check(&self) -> TimetableResult<bool> {
        self.repository.health_check().await
    }

    /// Create a new entry after the conflict gate passes.
    pub async fn create_entry(&self, draft: EntryDraft) -> TimetableResult<TimetableEntry> {
        match self.repository.insert_if_no_conflict(draft).await {
            Ok(entry) => {
                info!(
                    entry_id = entry.id.value(),
                    batch_id = entry.batch_id.value(),
                    day = %entry.slot.day_of_week,
                    "Created timetable entry"
                );
                Ok(entry)
            }
            Err(TimetableError::Conflict { conflicts }) => {
                warn!(
                    conflict_count = conflicts.len(),
                    "Rejected entry with scheduling conflict"
                );
                Err(TimetableError::Conflict { conflicts })
            }
            Err(err) => Err(err),
        }
    }

    /// Update an active entry; the merged result is re-validated and
    /// re-checked for conflicts, excluding the entry's own prior state.
    pub async fn update_entry(
        &self,
        id: EntryId,
        changes: EntryChanges,
    ) -> TimetableResult<TimetableEntry> {
        let entry = self.repository.update_if_no_conflict(id, changes).await?;
        info!(entry_id = id.value(), "Updated timetable entry");
        Ok(entry)
    }

    /// Soft-delete an entry. Idempotent.
    pub async fn deactivate(&self, id: EntryId) -> TimetableResult<()> {
        self.repository.deactivate(id).await?;
        info!(entry_id = id.value(), "Deactivated timetable entry");
        Ok(())
    }

    /// Fetch one entry by id, active or not.
    pub async fn get_entry(&self, id: EntryId) -> TimetableResult<TimetableEntry> {
        self.repository.get_entry(id).await
    }

    /// Advisory conflict check. Read-only; reserves nothing.
    pub async fn check_conflict(&self, draft: &EntryDraft) -> TimetableResult<ConflictReport> {
        self.repository.check_conflicts(draft, None).await
    }

    /// Active entries for a batch.
    pub async fn list_by_batch(&self, batch_id: BatchId) -> TimetableResult<Vec<TimetableEntry>> {
        self.repository.find_by_batch(batch_id).await
    }

    /// Active entries for a teacher.
    pub async fn list_by_teacher(
        &self,
        teacher_id: TeacherId,
    ) -> TimetableResult<Vec<TimetableEntry>> {
        self.repository.find_by_teacher(teacher_id).await
    }

    /// Active entries for every batch in a level, via the roster join.
    pub async fn list_by_level(&self, level_id: LevelId) -> TimetableResult<Vec<TimetableEntry>> {
        let batches = self.roster.batches_in_level(level_id).await?;
        if batches.is_empty() {
            return Ok(Vec::new());
        }
        self.repository.find_by_batches(&batches).await
    }

    /// Calendar export for a batch, anchored at `reference`.
    pub async fn export_calendar(
        &self,
        batch_id: BatchId,
        reference: DateTime<Utc>,
    ) -> TimetableResult<CalendarExport> {
        let entries = self.repository.find_by_batch(batch_id).await?;
        Ok(calendar::export_entries(&entries, reference))
    }

    /// Active entries grouped by day for the weekly dashboard grid.
    pub async fn weekly_grouping(
        &self,
    ) -> TimetableResult<BTreeMap<DayOfWeek, Vec<EntrySummary>>> {
        aggregator::weekly_grouping(self.repository.as_ref()).await
    }
}
