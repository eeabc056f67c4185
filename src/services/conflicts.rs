//! Conflict detection over active timetable entries.
//!
//! The detector is a pure function over a snapshot of entries. The store
//! runs it inside its write-locked critical section as the commit gate, and
//! the facade exposes it read-only for advisory pre-flight checks; both
//! paths share this one implementation so they can never disagree.

use serde::{Deserialize, Serialize};

use crate::api::EntryId;
use crate::models::{EntryDraft, TimetableEntry};

/// Scope in which a collision was found.
///
/// Batch and teacher scope are checked independently: a candidate that
/// collides with the same entry in both scopes is reported twice, once per
/// scope, so the caller can present both reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictScope {
    Batch,
    Teacher,
}

/// One collision: the existing active entry and the scope it was hit in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub scope: ConflictScope,
    pub entry: TimetableEntry,
}

/// Outcome of a conflict check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub conflicts: Vec<Conflict>,
}

impl ConflictReport {
    pub fn has_conflict(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Check a candidate against a snapshot of existing entries.
///
/// Only active entries participate. `exclude` names the entry being
/// replaced during an update so it does not conflict with its own prior
/// state. Entries without a teacher never take part in teacher-scope
/// checks.
pub fn detect(
    candidate: &EntryDraft,
    exclude: Option<EntryId>,
    existing: &[TimetableEntry],
) -> ConflictReport {
    let mut conflicts = Vec::new();

    for entry in existing {
        if !entry.is_active {
            continue;
        }
        if exclude == Some(entry.id) {
            continue;
        }
        if !candidate.slot.overlaps(&entry.slot) {
            continue;
        }

        if entry.batch_id == candidate.batch_id {
            conflicts.push(Conflict {
                scope: ConflictScope::Batch,
                entry: entry.clone(),
            });
        }

        if let (Some(candidate_teacher), Some(entry_teacher)) =
            (candidate.teacher_id, entry.teacher_id)
        {
            if candidate_teacher == entry_teacher {
                conflicts.push(Conflict {
                    scope: ConflictScope::Teacher,
                    entry: entry.clone(),
                });
            }
        }
    }

    ConflictReport { conflicts }
}
