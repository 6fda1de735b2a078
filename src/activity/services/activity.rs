//! Service layer for task activity CRUD, webhook updates and the audit trail.

use crate::activity::{
    domain::{
        ActivityDomainError, Delta, MergeError, SelectiveMerge, TaskActivity, TaskActivityFields,
        TaskActivityId, storage_timestamp,
    },
    ports::{TaskActivityRepository, TaskActivityRepositoryError},
};
use crate::history::{
    domain::HistoryEntry,
    ports::{HistoryRepository, HistoryRepositoryError},
    services::AuditLogger,
};
use crate::pagination::ListQuery;
use mockable::Clock;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskActivity {
    /// Caller-assigned identifier.
    pub task_id: TaskActivityId,
    /// Initial attribute values.
    pub fields: TaskActivityFields,
}

/// Outcome of a webhook-driven partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookUpdate {
    /// Updated record.
    pub task_id: TaskActivityId,
    /// Fields written, in schema order.
    pub modified: Vec<&'static str>,
    /// Payload keys that were dropped, sorted by name.
    pub ignored: Vec<String>,
}

/// Service-level errors for task activity operations.
#[derive(Debug, Error)]
pub enum ActivityServiceError {
    /// No record with the identifier exists.
    #[error("task activity {0} not found")]
    NotFound(TaskActivityId),

    /// The payload could not be turned into a valid delta.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// The webhook body is not a JSON object.
    #[error("bad payload: {0}")]
    BadPayload(String),

    /// The webhook body has no usable `task_id`.
    #[error(transparent)]
    MissingOrInvalidId(#[from] ActivityDomainError),

    /// Task activity persistence failed.
    #[error(transparent)]
    Repository(#[from] TaskActivityRepositoryError),

    /// Writing or reading the audit trail failed.
    #[error(transparent)]
    History(#[from] HistoryRepositoryError),
}

/// Result type for task activity service operations.
pub type ActivityServiceResult<T> = Result<T, ActivityServiceError>;

/// Task activity orchestration service.
///
/// Every mutation that affects a row is followed by exactly one history
/// entry. Mutations that affect nothing return
/// [`ActivityServiceError::NotFound`] and leave the audit trail untouched.
/// The mutation and its history entry are not written atomically.
pub struct TaskActivityService<R, H, C>
where
    R: TaskActivityRepository + ?Sized,
    H: HistoryRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    audit: AuditLogger<H, C>,
    clock: Arc<C>,
    merge: SelectiveMerge<'static>,
}

impl<R, H, C> TaskActivityService<R, H, C>
where
    R: TaskActivityRepository + ?Sized,
    H: HistoryRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task activity service.
    #[must_use]
    pub fn new(repository: Arc<R>, history: Arc<H>, clock: Arc<C>) -> Self {
        Self {
            repository,
            audit: AuditLogger::new(history, Arc::clone(&clock)),
            clock,
            merge: SelectiveMerge::default(),
        }
    }

    /// Fetches a single record.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityServiceError::NotFound`] when the record is absent.
    pub async fn get(&self, task_id: TaskActivityId) -> ActivityServiceResult<TaskActivity> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(ActivityServiceError::NotFound(task_id))
    }

    /// Stores a new record and audits the creation.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityServiceError::Repository`] with
    /// [`TaskActivityRepositoryError::DuplicateId`] when the identifier is
    /// taken.
    pub async fn create(&self, request: NewTaskActivity) -> ActivityServiceResult<TaskActivity> {
        let activity = TaskActivity::new(request.task_id, request.fields, &*self.clock);
        self.repository.create(&activity).await?;
        self.audit.record_created(activity.task_id()).await?;
        tracing::info!(task_id = %activity.task_id(), action = "create", "task activity created");
        Ok(activity)
    }

    /// Lists records in insertion order, windowed by `query`.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn list(&self, query: ListQuery) -> ActivityServiceResult<Vec<TaskActivity>> {
        Ok(self.repository.list(query).await?)
    }

    /// Overwrites every mutable attribute of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityServiceError::NotFound`] when the record is absent.
    pub async fn replace(
        &self,
        task_id: TaskActivityId,
        fields: TaskActivityFields,
    ) -> ActivityServiceResult<TaskActivity> {
        let delta = Delta::replacing(&fields);
        let written_at = storage_timestamp(self.clock.utc());
        let affected = self
            .repository
            .apply_delta(task_id, &delta, written_at)
            .await?;
        if affected == 0 {
            return Err(ActivityServiceError::NotFound(task_id));
        }

        self.audit.record_replaced(task_id).await?;
        tracing::info!(task_id = %task_id, action = "update", "task activity replaced");
        Ok(TaskActivity::from_persisted(task_id, fields, written_at))
    }

    /// Deletes a record and audits the deletion.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityServiceError::NotFound`] when the record is absent.
    pub async fn delete(&self, task_id: TaskActivityId) -> ActivityServiceResult<HistoryEntry> {
        let affected = self.repository.delete_by_id(task_id).await?;
        if affected == 0 {
            return Err(ActivityServiceError::NotFound(task_id));
        }

        let entry = self.audit.record_deleted(task_id).await?;
        tracing::info!(task_id = %task_id, action = "delete", "task activity deleted");
        Ok(entry)
    }

    /// Applies a partial update pushed by an external system.
    ///
    /// The body must be a JSON object with an integer `task_id`. Remaining
    /// keys are filtered through the selective merge; unknown keys are
    /// dropped, invalid values reject the whole update.
    ///
    /// # Errors
    ///
    /// Returns, in order of precedence,
    /// [`ActivityServiceError::BadPayload`],
    /// [`ActivityServiceError::MissingOrInvalidId`],
    /// [`ActivityServiceError::Merge`] and
    /// [`ActivityServiceError::NotFound`].
    pub async fn apply_webhook(&self, body: &[u8]) -> ActivityServiceResult<WebhookUpdate> {
        let mut payload = parse_object(body).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected webhook payload");
        })?;

        let task_id = payload
            .remove("task_id")
            .ok_or(ActivityDomainError::MissingTaskId)
            .and_then(|raw| TaskActivityId::from_json(&raw))
            .inspect_err(|err| tracing::warn!(error = %err, "rejected webhook payload"))?;

        let ignored: Vec<String> = self
            .merge
            .ignored_keys(&payload)
            .into_iter()
            .map(str::to_owned)
            .collect();
        if !ignored.is_empty() {
            tracing::debug!(task_id = %task_id, ?ignored, "dropped unknown webhook keys");
        }

        let delta = self.merge.compute_delta(&payload).inspect_err(|err| {
            tracing::warn!(task_id = %task_id, error = %err, "rejected webhook payload");
        })?;

        let affected = self
            .repository
            .apply_delta(task_id, &delta, storage_timestamp(self.clock.utc()))
            .await?;
        if affected == 0 {
            tracing::warn!(task_id = %task_id, "webhook targeted unknown task activity");
            return Err(ActivityServiceError::NotFound(task_id));
        }

        self.audit.record_updated(task_id, &delta).await?;
        let modified = delta.field_names();
        tracing::info!(task_id = %task_id, action = "update", ?modified, "task activity updated");
        Ok(WebhookUpdate {
            task_id,
            modified,
            ignored,
        })
    }

    /// Lists audit entries in insertion order, windowed by `query`.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn histories(&self, query: ListQuery) -> ActivityServiceResult<Vec<HistoryEntry>> {
        Ok(self.audit.repository().list(query).await?)
    }
}

fn parse_object(body: &[u8]) -> ActivityServiceResult<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ActivityServiceError::BadPayload(
            "expected a JSON object".to_owned(),
        )),
        Err(err) => Err(ActivityServiceError::BadPayload(err.to_string())),
    }
}
