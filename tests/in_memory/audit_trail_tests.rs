//! Audit trail integration tests.

use crate::in_memory::helpers::{TestService, history_trail, record_fields, seed, service};
use rstest::rstest;
use serde_json::json;
use tasktrail::activity::{domain::TaskActivityId, services::ActivityServiceError};
use tasktrail::history::domain::HistoryAction;
use tasktrail::pagination::ListQuery;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_leaves_one_entry_per_mutation(service: TestService) -> eyre::Result<()> {
    let id = TaskActivityId::new(42);
    seed(&service, 42).await?;
    let body = json!({"task_id": 42, "notes": "left voicemail"}).to_string();
    service.apply_webhook(body.as_bytes()).await?;
    service.replace(id, record_fields()?).await?;
    service.delete(id).await?;

    assert_eq!(
        history_trail(&service).await?,
        vec![
            (42, HistoryAction::Create),
            (42, HistoryAction::Update),
            (42, HistoryAction::Update),
            (42, HistoryAction::Delete),
        ]
    );

    let descriptions: Vec<String> = service
        .histories(ListQuery::oldest_first())
        .await?
        .iter()
        .map(|entry| entry.description().to_owned())
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "Task 42 was created by user",
            "Task 42 was updated: notes were modified.",
            "Task 42 was updated",
            "Task 42 was deleted by user",
        ]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn no_op_mutations_leave_no_trace(service: TestService) -> eyre::Result<()> {
    let missing = TaskActivityId::new(7);

    let replaced = service.replace(missing, record_fields()?).await;
    let deleted = service.delete(missing).await;
    let patched = service
        .apply_webhook(json!({"task_id": 7, "status": "completed"}).to_string().as_bytes())
        .await;

    assert!(matches!(replaced, Err(ActivityServiceError::NotFound(_))));
    assert!(matches!(deleted, Err(ActivityServiceError::NotFound(_))));
    assert!(matches!(patched, Err(ActivityServiceError::NotFound(_))));
    assert!(history_trail(&service).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn history_outlives_deleted_records(service: TestService) -> eyre::Result<()> {
    seed(&service, 1).await?;
    seed(&service, 2).await?;
    service.delete(TaskActivityId::new(1)).await?;

    let remaining = service.list(ListQuery::oldest_first()).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(
        history_trail(&service).await?,
        vec![
            (1, HistoryAction::Create),
            (2, HistoryAction::Create),
            (1, HistoryAction::Delete),
        ]
    );
    Ok(())
}
