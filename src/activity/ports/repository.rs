//! Repository port for task activity persistence.

use crate::activity::domain::{Delta, TaskActivity, TaskActivityId};
use crate::pagination::ListQuery;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task activity repository operations.
pub type TaskActivityRepositoryResult<T> = Result<T, TaskActivityRepositoryError>;

/// Task activity persistence contract.
///
/// Mutations report the number of affected rows; `0` means the identifier
/// does not exist and is not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskActivityRepository: Send + Sync {
    /// Finds a task activity by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: TaskActivityId)
    -> TaskActivityRepositoryResult<Option<TaskActivity>>;

    /// Stores a new task activity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskActivityRepositoryError::DuplicateId`] when the
    /// identifier is already taken.
    async fn create(&self, activity: &TaskActivity) -> TaskActivityRepositoryResult<()>;

    /// Applies `delta` to the record and re-stamps `created_on` with
    /// `written_at`. Returns the number of affected rows.
    async fn apply_delta(
        &self,
        id: TaskActivityId,
        delta: &Delta,
        written_at: DateTime<Utc>,
    ) -> TaskActivityRepositoryResult<u64>;

    /// Deletes the record. Returns the number of affected rows.
    async fn delete_by_id(&self, id: TaskActivityId) -> TaskActivityRepositoryResult<u64>;

    /// Lists records in insertion order, windowed by `query`.
    async fn list(&self, query: ListQuery) -> TaskActivityRepositoryResult<Vec<TaskActivity>>;
}

/// Errors returned by task activity repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskActivityRepositoryError {
    /// A task activity with the same identifier already exists.
    #[error("duplicate task activity identifier: {0}")]
    DuplicateId(TaskActivityId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskActivityRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
