//! Roster collaborator: the external owner of batch/teacher/level identity.
//!
//! The engine never validates that a batch or teacher exists; it only needs
//! the batch→level membership to answer level-scoped listings. That lookup
//! is abstracted behind [`Roster`] so deployments can plug in the real
//! roster service while tests and single-process setups use
//! [`StaticRoster`].

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{BatchId, LevelId};
use crate::error::TimetableResult;

/// Batch→level membership lookup.
#[async_trait]
pub trait Roster: Send + Sync {
    /// Batches belonging to a level. An unknown level is simply a level
    /// with no batches; the roster owns that data, not the engine.
    async fn batches_in_level(&self, level: LevelId) -> TimetableResult<Vec<BatchId>>;
}

/// In-memory roster for tests, local development, and deployments where
/// level membership is provided by configuration.
#[derive(Default)]
pub struct StaticRoster {
    levels: RwLock<HashMap<LevelId, Vec<BatchId>>>,
}

impl StaticRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch to a level. Duplicate assignments are ignored.
    pub fn assign_batch(&self, level: LevelId, batch: BatchId) {
        let mut levels = self.levels.write();
        let batches = levels.entry(level).or_default();
        if !batches.contains(&batch) {
            batches.push(batch);
        }
    }
}

#[async_trait]
impl Roster for StaticRoster {
    async fn batches_in_level(&self, level: LevelId) -> TimetableResult<Vec<BatchId>> {
        Ok(self
            .levels
            .read()
            .get(&level)
            .cloned()
            .unwrap_or_default())
    }
}
