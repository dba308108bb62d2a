//! In-memory scheduling pool record.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One scheduling pool: a name and the stages currently assigned to it.
///
/// The name is an `Arc<str>` so that records decoded through an interner
/// share a single allocation per distinct name. `stage_ids` has set
/// semantics; duplicates collapse on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolData {
    /// Pool name. Also the record's key in a store.
    pub name: Arc<str>,

    /// Ids of the stages assigned to this pool.
    pub stage_ids: HashSet<i32>,
}

impl PoolData {
    /// Creates a pool record, deduplicating `stage_ids`.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, stage_ids: impl IntoIterator<Item = i32>) -> Self {
        Self {
            name: name.into(),
            stage_ids: stage_ids.into_iter().collect(),
        }
    }

    /// Returns the key the record is indexed by (the pool name).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the stage is assigned to this pool.
    #[must_use]
    pub fn contains_stage(&self, stage_id: i32) -> bool {
        self.stage_ids.contains(&stage_id)
    }

    /// Returns the number of assigned stages.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stage_ids.len()
    }
}
