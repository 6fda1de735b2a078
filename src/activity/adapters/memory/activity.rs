//! In-memory repository for task activities.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::activity::{
    domain::{Delta, TaskActivity, TaskActivityId},
    ports::{TaskActivityRepository, TaskActivityRepositoryError, TaskActivityRepositoryResult},
};
use crate::pagination::ListQuery;

/// Thread-safe in-memory task activity repository.
///
/// Rows are keyed by an insertion sequence so that listings can be served
/// newest first independently of the caller-assigned identifiers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskActivityRepository {
    state: Arc<RwLock<InMemoryActivityState>>,
}

#[derive(Debug, Default)]
struct InMemoryActivityState {
    rows: BTreeMap<u64, TaskActivity>,
    id_index: HashMap<TaskActivityId, u64>,
    next_seq: u64,
}

impl InMemoryTaskActivityRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: &impl std::fmt::Display) -> TaskActivityRepositoryError {
    TaskActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskActivityRepository for InMemoryTaskActivityRepository {
    async fn find_by_id(
        &self,
        id: TaskActivityId,
    ) -> TaskActivityRepositoryResult<Option<TaskActivity>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state
            .id_index
            .get(&id)
            .and_then(|seq| state.rows.get(seq))
            .cloned())
    }

    async fn create(&self, activity: &TaskActivity) -> TaskActivityRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        if state.id_index.contains_key(&activity.task_id()) {
            return Err(TaskActivityRepositoryError::DuplicateId(activity.task_id()));
        }

        let seq = state.next_seq;
        state.next_seq = seq.saturating_add(1);
        state.id_index.insert(activity.task_id(), seq);
        state.rows.insert(seq, activity.clone());
        Ok(())
    }

    async fn apply_delta(
        &self,
        id: TaskActivityId,
        delta: &Delta,
        written_at: DateTime<Utc>,
    ) -> TaskActivityRepositoryResult<u64> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let Some(seq) = state.id_index.get(&id).copied() else {
            return Ok(0);
        };
        let Some(row) = state.rows.get_mut(&seq) else {
            return Ok(0);
        };
        row.apply_delta(delta, written_at);
        Ok(1)
    }

    async fn delete_by_id(&self, id: TaskActivityId) -> TaskActivityRepositoryResult<u64> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let Some(seq) = state.id_index.remove(&id) else {
            return Ok(0);
        };
        state.rows.remove(&seq);
        Ok(1)
    }

    async fn list(&self, query: ListQuery) -> TaskActivityRepositoryResult<Vec<TaskActivity>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(query.window(state.rows.values().cloned()))
    }
}
