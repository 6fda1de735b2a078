//! Shared helpers for in-memory service integration tests.

use std::sync::Arc;

use eyre::{WrapErr, eyre};
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::{Map, Value, json};
use tasktrail::activity::{
    adapters::memory::InMemoryTaskActivityRepository,
    domain::{TaskActivity, TaskActivityFields, TaskActivityId},
    services::{NewTaskActivity, TaskActivityService},
};
use tasktrail::history::{adapters::memory::InMemoryHistoryRepository, domain::HistoryAction};
use tasktrail::pagination::ListQuery;

/// Service over fresh in-memory repositories.
pub type TestService =
    TaskActivityService<InMemoryTaskActivityRepository, InMemoryHistoryRepository, DefaultClock>;

/// Provides a fresh service for each test.
#[fixture]
pub fn service() -> TestService {
    TaskActivityService::new(
        Arc::new(InMemoryTaskActivityRepository::new()),
        Arc::new(InMemoryHistoryRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// A complete attribute payload, without `task_id`.
///
/// # Errors
///
/// Returns an error if the literal is not a JSON object.
pub fn record_payload() -> eyre::Result<Map<String, Value>> {
    let value = json!({
        "task_name": "Quarterly review call",
        "task_description": "Walk through renewal terms",
        "activity_type_id": 6,
        "activity_type_name": "calls",
        "activity_group_sub_category_id": 1,
        "activity_group_sub_category_name": "customer contact",
        "activity_group_id": 2,
        "activity_group_name": "engagement",
        "stage_id": 3,
        "stage_name": "negotiation",
        "core_group_category_id": 4,
        "core_group_category": "customers",
        "core_group_id": 5,
        "core_group_name": "Globex",
        "due_date": "2026-12-01",
        "action_type": "call",
        "related_to": "Lee Park",
        "related_to_picture_id": 21,
        "related_to_email": "lee@globex.example",
        "related_to_company": "Globex",
        "assign_to": "Ari Gold",
        "assign_to_picture_id": 22,
        "assign_to_email": "ari@acme.example",
        "assign_to_company": "Acme",
        "notes": "",
        "status": "not started",
        "attachment_id": 0,
        "attachments": "",
        "link_response_id": 0,
        "link_object_id": 0,
        "created_by": "ari",
    });
    match value {
        Value::Object(map) => Ok(map),
        other => Err(eyre!("expected object, got {other}")),
    }
}

/// Validated attributes built from [`record_payload`].
///
/// # Errors
///
/// Returns an error if the payload fails validation.
pub fn record_fields() -> eyre::Result<TaskActivityFields> {
    TaskActivityFields::from_payload(&record_payload()?).wrap_err("record payload is invalid")
}

/// Creates a record with the standard attributes.
///
/// # Errors
///
/// Returns an error if creation fails.
pub async fn seed(service: &TestService, raw_id: i64) -> eyre::Result<TaskActivity> {
    service
        .create(NewTaskActivity {
            task_id: TaskActivityId::new(raw_id),
            fields: record_fields()?,
        })
        .await
        .wrap_err_with(|| format!("failed to seed task {raw_id}"))
}

/// Returns `(task_id, action)` for every history entry, oldest first.
///
/// # Errors
///
/// Returns an error if the history listing fails.
pub async fn history_trail(service: &TestService) -> eyre::Result<Vec<(i64, HistoryAction)>> {
    let entries = service
        .histories(ListQuery::oldest_first())
        .await
        .wrap_err("history listing failed")?;
    Ok(entries
        .iter()
        .map(|entry| (entry.task_id().value(), entry.action()))
        .collect())
}
