//! Shared helpers for integration tests.

use std::sync::Arc;

use timetable_engine::api::{BatchId, EntryDraft, TeacherId, WeeklySlot};
use timetable_engine::db::repositories::LocalRepository;
use timetable_engine::engine::SchedulingEngine;
use timetable_engine::models::DayOfWeek;
use timetable_engine::services::roster::StaticRoster;

/// Build an engine over a fresh in-memory repository and empty roster,
/// returning the collaborators alongside for direct inspection.
pub fn build_engine() -> (Arc<SchedulingEngine>, Arc<LocalRepository>, Arc<StaticRoster>) {
    let repository = Arc::new(LocalRepository::new());
    let roster = Arc::new(StaticRoster::new());
    let engine = Arc::new(SchedulingEngine::new(repository.clone(), roster.clone()));
    (engine, repository, roster)
}

/// Candidate draft with the common fields filled in.
pub fn draft(
    batch: i64,
    teacher: Option<i64>,
    day: DayOfWeek,
    start: &str,
    end: &str,
) -> EntryDraft {
    let slot = WeeklySlot::new(day, start.parse().unwrap(), end.parse().unwrap()).unwrap();
    EntryDraft::new(
        BatchId::new(batch),
        teacher.map(TeacherId::new),
        slot,
        None,
        None,
    )
}
