//! Webhook flow integration tests.

use crate::in_memory::helpers::{TestService, history_trail, seed, service};
use rstest::rstest;
use serde_json::json;
use tasktrail::activity::{
    domain::{ActivityStatus, MergeError, StageName, TaskActivityId},
    services::ActivityServiceError,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn partial_update_touches_only_named_fields(service: TestService) -> eyre::Result<()> {
    let before = seed(&service, 5).await?;
    let body = json!({
        "task_id": 5,
        "status": "completed",
        "stage_name": "closed",
        "stage_id": "9",
        "bogus_field": "x",
    })
    .to_string();

    let outcome = service.apply_webhook(body.as_bytes()).await?;
    let after = service.get(TaskActivityId::new(5)).await?;

    assert_eq!(outcome.modified, vec!["stage_id", "stage_name", "status"]);
    assert_eq!(outcome.ignored, vec!["bogus_field".to_owned()]);
    assert_eq!(after.fields().status, ActivityStatus::Completed);
    assert_eq!(after.fields().stage_name, StageName::Closed);
    assert_eq!(after.fields().stage_id, 9);
    assert_eq!(after.fields().task_name, before.fields().task_name);
    assert_eq!(after.fields().due_date, before.fields().due_date);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_value_leaves_record_untouched(service: TestService) -> eyre::Result<()> {
    let before = seed(&service, 5).await?;
    let body = json!({"task_id": 5, "notes": "changed", "status": "not_a_real_status"}).to_string();

    let result = service.apply_webhook(body.as_bytes()).await;
    let after = service.get(TaskActivityId::new(5)).await?;

    assert!(matches!(
        result,
        Err(ActivityServiceError::Merge(MergeError::InvalidFieldValue { ref field, .. }))
            if field == "status"
    ));
    assert_eq!(after, before);
    assert_eq!(history_trail(&service).await?.len(), 1);
    Ok(())
}

#[rstest]
#[case::body_before_id(b"[]".as_slice(), "bad payload")]
#[case::id_before_fields(br#"{"status": "bogus"}"#.as_slice(), "missing")]
#[case::fields_before_store(br#"{"task_id": 404, "status": "bogus"}"#.as_slice(), "merge")]
#[case::store_last(br#"{"task_id": 404, "status": "completed"}"#.as_slice(), "not found")]
#[tokio::test(flavor = "multi_thread")]
async fn failures_follow_validation_order(
    service: TestService,
    #[case] body: &[u8],
    #[case] expected: &str,
) {
    let result = service.apply_webhook(body).await;

    let kind = match result {
        Err(ActivityServiceError::BadPayload(_)) => "bad payload",
        Err(ActivityServiceError::MissingOrInvalidId(_)) => "missing",
        Err(ActivityServiceError::Merge(_)) => "merge",
        Err(ActivityServiceError::NotFound(_)) => "not found",
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(kind, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn webhook_restamps_created_on(service: TestService) -> eyre::Result<()> {
    let before = seed(&service, 3).await?;
    let body = json!({"task_id": 3, "notes": "rescheduled"}).to_string();

    service.apply_webhook(body.as_bytes()).await?;
    let after = service.get(TaskActivityId::new(3)).await?;

    assert!(after.created_on() >= before.created_on());
    assert_eq!(after.fields().notes, "rescheduled");
    Ok(())
}
