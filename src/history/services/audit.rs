//! Synthesises one history entry per confirmed mutation.

use crate::activity::domain::{Delta, TaskActivityId, storage_timestamp};
use crate::history::{
    domain::{HistoryAction, HistoryEntry, NewHistoryEntry},
    ports::{HistoryRepository, HistoryRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;

/// Writes audit entries for task activity mutations.
///
/// Callers invoke the logger only after the store reports at least one
/// affected row; the logger itself never inspects the task activity store.
pub struct AuditLogger<H, C>
where
    H: HistoryRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<H>,
    clock: Arc<C>,
}

impl<H, C> Clone for AuditLogger<H, C>
where
    H: HistoryRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<H, C> AuditLogger<H, C>
where
    H: HistoryRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a logger writing to `repository`, stamped by `clock`.
    #[must_use]
    pub const fn new(repository: Arc<H>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the underlying history repository.
    #[must_use]
    pub const fn repository(&self) -> &Arc<H> {
        &self.repository
    }

    /// Appends one entry and returns it as stored.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn record(
        &self,
        task_id: TaskActivityId,
        action: HistoryAction,
        description: impl Into<String> + Send,
    ) -> HistoryRepositoryResult<HistoryEntry> {
        let entry = NewHistoryEntry {
            task_id,
            action,
            description: description.into(),
            time: storage_timestamp(self.clock.utc()),
        };
        let stored = self.repository.append(&entry).await?;
        tracing::debug!(
            task_id = %task_id,
            action = %action,
            history_id = %stored.id(),
            "recorded history entry"
        );
        Ok(stored)
    }

    /// Records a `create` entry.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn record_created(
        &self,
        task_id: TaskActivityId,
    ) -> HistoryRepositoryResult<HistoryEntry> {
        self.record(
            task_id,
            HistoryAction::Create,
            format!("Task {task_id} was created by user"),
        )
        .await
    }

    /// Records a `delete` entry.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn record_deleted(
        &self,
        task_id: TaskActivityId,
    ) -> HistoryRepositoryResult<HistoryEntry> {
        self.record(
            task_id,
            HistoryAction::Delete,
            format!("Task {task_id} was deleted by user"),
        )
        .await
    }

    /// Records an `update` entry for a full replacement.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn record_replaced(
        &self,
        task_id: TaskActivityId,
    ) -> HistoryRepositoryResult<HistoryEntry> {
        self.record(
            task_id,
            HistoryAction::Update,
            format!("Task {task_id} was updated"),
        )
        .await
    }

    /// Records an `update` entry naming the fields `delta` touched.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn record_updated(
        &self,
        task_id: TaskActivityId,
        delta: &Delta,
    ) -> HistoryRepositoryResult<HistoryEntry> {
        self.record(
            task_id,
            HistoryAction::Update,
            describe_update(task_id, delta),
        )
        .await
    }
}

/// Formats the description of a partial update.
#[must_use]
pub(crate) fn describe_update(task_id: TaskActivityId, delta: &Delta) -> String {
    format!(
        "Task {task_id} was updated: {} were modified.",
        delta.field_names().join(", ")
    )
}
