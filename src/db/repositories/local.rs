//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the repository trait
//! suitable for unit testing, local development, and single-process
//! deployments. All data lives in memory behind a single `RwLock`.
//!
//! The write lock doubles as the critical section required by the
//! conflict-gated writes: `insert_if_no_conflict` and
//! `update_if_no_conflict` hold it across the check and the commit, so the
//! check-then-insert race cannot admit two overlapping entries. Reads take
//! the read lock only.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::api::{BatchId, EntryId, TeacherId};
use crate::db::repository::TimetableRepository;
use crate::error::{TimetableError, TimetableResult};
use crate::models::{EntryChanges, EntryDraft, TimetableEntry};
use crate::services::conflicts::{self, ConflictReport};

/// In-memory timetable repository.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    entries: HashMap<EntryId, TimetableEntry>,

    // ID counter
    next_entry_id: i64,

    // Connection health, togglable for failure-path tests
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            next_entry_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Total number of entries held, active and inactive.
    pub fn entry_count(&self) -> usize {
        self.data.read().entries.len()
    }

    fn check_health(&self, data: &LocalData) -> TimetableResult<()> {
        if !data.is_healthy {
            return Err(TimetableError::Store(
                "Repository is not healthy".to_string(),
            ));
        }
        Ok(())
    }

    /// Snapshot of all entries for the conflict detector.
    fn snapshot(data: &LocalData) -> Vec<TimetableEntry> {
        data.entries.values().cloned().collect()
    }

    /// Collect active entries matching `keep`, in the contract ordering.
    fn collect_active(
        &self,
        keep: impl Fn(&TimetableEntry) -> bool,
    ) -> TimetableResult<Vec<TimetableEntry>> {
        let data = self.data.read();
        self.check_health(&data)?;

        let mut entries: Vec<TimetableEntry> = data
            .entries
            .values()
            .filter(|entry| entry.is_active && keep(entry))
            .cloned()
            .collect();

        entries.sort_by_key(|entry| {
            (
                entry.slot.day_of_week,
                entry.slot.start_time,
                entry.id,
            )
        });
        Ok(entries)
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimetableRepository for LocalRepository {
    async fn health_check(&self) -> TimetableResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn insert_if_no_conflict(&self, draft: EntryDraft) -> TimetableResult<TimetableEntry> {
        // Write lock spans check and commit: concurrent conflicting
        // candidates serialize here and the loser sees the winner.
        let mut data = self.data.write();
        self.check_health(&data)?;

        let report = conflicts::detect(&draft, None, &Self::snapshot(&data));
        if report.has_conflict() {
            return Err(TimetableError::Conflict {
                conflicts: report.conflicts,
            });
        }

        let id = EntryId::new(data.next_entry_id);
        data.next_entry_id += 1;

        let entry = draft.into_entry(id);
        data.entries.insert(id, entry.clone());
        debug!(entry_id = id.value(), "Inserted timetable entry");
        Ok(entry)
    }

    async fn update_if_no_conflict(
        &self,
        id: EntryId,
        changes: EntryChanges,
    ) -> TimetableResult<TimetableEntry> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        let current = data
            .entries
            .get(&id)
            .filter(|entry| entry.is_active)
            .cloned()
            .ok_or_else(|| {
                TimetableError::NotFound(format!("Active entry {} not found", id))
            })?;

        let draft = changes.apply_to(&current)?;

        let report = conflicts::detect(&draft, Some(id), &Self::snapshot(&data));
        if report.has_conflict() {
            return Err(TimetableError::Conflict {
                conflicts: report.conflicts,
            });
        }

        let entry = draft.into_entry(id);
        data.entries.insert(id, entry.clone());
        debug!(entry_id = id.value(), "Updated timetable entry");
        Ok(entry)
    }

    async fn deactivate(&self, id: EntryId) -> TimetableResult<()> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        let entry = data
            .entries
            .get_mut(&id)
            .ok_or_else(|| TimetableError::NotFound(format!("Entry {} not found", id)))?;

        // Already-inactive entries stay as they are; the call is a no-op.
        entry.is_active = false;
        Ok(())
    }

    async fn get_entry(&self, id: EntryId) -> TimetableResult<TimetableEntry> {
        let data = self.data.read();
        self.check_health(&data)?;

        data.entries
            .get(&id)
            .cloned()
            .ok_or_else(|| TimetableError::NotFound(format!("Entry {} not found", id)))
    }

    async fn check_conflicts(
        &self,
        draft: &EntryDraft,
        exclude: Option<EntryId>,
    ) -> TimetableResult<ConflictReport> {
        let data = self.data.read();
        self.check_health(&data)?;
        Ok(conflicts::detect(draft, exclude, &Self::snapshot(&data)))
    }

    async fn find_by_batch(&self, batch_id: BatchId) -> TimetableResult<Vec<TimetableEntry>> {
        self.collect_active(|entry| entry.batch_id == batch_id)
    }

    async fn find_by_teacher(
        &self,
        teacher_id: TeacherId,
    ) -> TimetableResult<Vec<TimetableEntry>> {
        self.collect_active(|entry| entry.teacher_id == Some(teacher_id))
    }

    async fn find_by_batches(
        &self,
        batch_ids: &[BatchId],
    ) -> TimetableResult<Vec<TimetableEntry>> {
        self.collect_active(|entry| batch_ids.contains(&entry.batch_id))
    }

    async fn list_active(&self) -> TimetableResult<Vec<TimetableEntry>> {
        self.collect_active(|_| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, WeeklySlot};

    fn draft(batch: i64, teacher: Option<i64>, day: DayOfWeek, start: &str, end: &str) -> EntryDraft {
        let slot = WeeklySlot::new(day, start.parse().unwrap(), end.parse().unwrap()).unwrap();
        EntryDraft::new(
            BatchId::new(batch),
            teacher.map(TeacherId::new),
            slot,
            None,
            None,
        )
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = LocalRepository::new();
        let a = repo
            .insert_if_no_conflict(draft(1, None, DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap();
        let b = repo
            .insert_if_no_conflict(draft(2, None, DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap();
        assert_eq!(a.id.value(), 1);
        assert_eq!(b.id.value(), 2);
    }

    #[tokio::test]
    async fn test_insert_rejects_batch_overlap() {
        let repo = LocalRepository::new();
        let winner = repo
            .insert_if_no_conflict(draft(7, Some(3), DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap();

        let err = repo
            .insert_if_no_conflict(draft(7, Some(5), DayOfWeek::Monday, "09:30", "10:30"))
            .await
            .unwrap_err();

        match err {
            TimetableError::Conflict { conflicts } => {
                assert_eq!(conflicts.len(), 1);
                assert_eq!(conflicts[0].entry.id, winner.id);
            }
            other => panic!("Expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_excludes_own_prior_state() {
        let repo = LocalRepository::new();
        let entry = repo
            .insert_if_no_conflict(draft(7, Some(3), DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap();

        // Shifting within its own slot must not self-conflict.
        let changes = EntryChanges {
            start_time: Some("09:15".parse().unwrap()),
            ..Default::default()
        };
        let updated = repo.update_if_no_conflict(entry.id, changes).await.unwrap();
        assert_eq!(updated.slot.start_time.to_string(), "09:15");
    }

    #[tokio::test]
    async fn test_update_conflicts_with_other_entry() {
        let repo = LocalRepository::new();
        repo.insert_if_no_conflict(draft(7, None, DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap();
        let other = repo
            .insert_if_no_conflict(draft(7, None, DayOfWeek::Monday, "10:00", "11:00"))
            .await
            .unwrap();

        let changes = EntryChanges {
            start_time: Some("09:30".parse().unwrap()),
            end_time: Some("10:30".parse().unwrap()),
            ..Default::default()
        };
        let err = repo.update_if_no_conflict(other.id, changes).await.unwrap_err();
        assert!(matches!(err, TimetableError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_unknown_or_inactive_is_not_found() {
        let repo = LocalRepository::new();
        let err = repo
            .update_if_no_conflict(EntryId::new(99), EntryChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TimetableError::NotFound(_)));

        let entry = repo
            .insert_if_no_conflict(draft(7, None, DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap();
        repo.deactivate(entry.id).await.unwrap();
        let err = repo
            .update_if_no_conflict(entry.id, EntryChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TimetableError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_deactivate_is_idempotent_and_soft() {
        let repo = LocalRepository::new();
        let entry = repo
            .insert_if_no_conflict(draft(7, None, DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap();

        repo.deactivate(entry.id).await.unwrap();
        repo.deactivate(entry.id).await.unwrap();

        // Gone from listings, still present in the store.
        assert!(repo.find_by_batch(BatchId::new(7)).await.unwrap().is_empty());
        assert_eq!(repo.entry_count(), 1);
        assert!(!repo.get_entry(entry.id).await.unwrap().is_active);
    }

    #[tokio::test]
    async fn test_deactivate_unknown_is_not_found() {
        let repo = LocalRepository::new();
        let err = repo.deactivate(EntryId::new(42)).await.unwrap_err();
        assert!(matches!(err, TimetableError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_deactivated_slot_is_reusable() {
        let repo = LocalRepository::new();
        let entry = repo
            .insert_if_no_conflict(draft(7, Some(3), DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap();
        repo.deactivate(entry.id).await.unwrap();

        // The slot is free again once its occupant is inactive.
        repo.insert_if_no_conflict(draft(7, Some(3), DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_listing_order_contract() {
        let repo = LocalRepository::new();
        repo.insert_if_no_conflict(draft(7, None, DayOfWeek::Friday, "09:00", "10:00"))
            .await
            .unwrap();
        repo.insert_if_no_conflict(draft(7, None, DayOfWeek::Monday, "14:00", "15:00"))
            .await
            .unwrap();
        repo.insert_if_no_conflict(draft(7, None, DayOfWeek::Monday, "08:00", "09:00"))
            .await
            .unwrap();

        let entries = repo.find_by_batch(BatchId::new(7)).await.unwrap();
        let keys: Vec<(u8, String)> = entries
            .iter()
            .map(|e| (e.slot.day_of_week.index(), e.slot.start_time.to_string()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (1, "08:00".to_string()),
                (1, "14:00".to_string()),
                (5, "09:00".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_find_by_teacher_skips_unassigned() {
        let repo = LocalRepository::new();
        repo.insert_if_no_conflict(draft(7, Some(3), DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap();
        repo.insert_if_no_conflict(draft(8, None, DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap();

        let entries = repo.find_by_teacher(TeacherId::new(3)).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].batch_id, BatchId::new(7));
    }

    #[tokio::test]
    async fn test_unhealthy_repository_reports_store_error() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        assert!(!repo.health_check().await.unwrap());
        let err = repo
            .insert_if_no_conflict(draft(7, None, DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, TimetableError::Store(_)));
    }
}
