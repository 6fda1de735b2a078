//! Tests for the audit logger over the in-memory history log.

use std::sync::Arc;

use crate::activity::domain::{
    ActivityStatus, Delta, FieldChange, TaskActivityId, storage_timestamp,
};
use crate::history::{
    adapters::memory::InMemoryHistoryRepository,
    domain::HistoryAction,
    ports::HistoryRepository,
    services::AuditLogger,
};
use crate::pagination::ListQuery;
use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestLogger = AuditLogger<InMemoryHistoryRepository, DefaultClock>;

#[fixture]
fn logger() -> TestLogger {
    AuditLogger::new(
        Arc::new(InMemoryHistoryRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn record_created_uses_create_action_and_stamps_time(logger: TestLogger) {
    let before = storage_timestamp(Utc::now());
    let entry = logger
        .record_created(TaskActivityId::new(7))
        .await
        .expect("append should succeed");
    let after = Utc::now();

    assert_eq!(entry.task_id(), TaskActivityId::new(7));
    assert_eq!(entry.action(), HistoryAction::Create);
    assert_eq!(entry.description(), "Task 7 was created by user");
    assert!(entry.time() >= before && entry.time() <= after);
    assert_eq!(entry.time().timestamp_subsec_nanos() % 1_000, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn record_updated_names_modified_fields(logger: TestLogger) {
    let delta = Delta::from_changes([
        FieldChange::Status(ActivityStatus::Completed),
        FieldChange::TaskName("Call back".to_owned()),
    ]);

    let entry = logger
        .record_updated(TaskActivityId::new(5), &delta)
        .await
        .expect("append should succeed");

    assert_eq!(entry.action(), HistoryAction::Update);
    assert_eq!(
        entry.description(),
        "Task 5 was updated: task_name, status were modified."
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn entries_receive_increasing_ids(logger: TestLogger) {
    let id = TaskActivityId::new(1);
    let first = logger.record_created(id).await.expect("create entry");
    let second = logger.record_replaced(id).await.expect("update entry");
    let third = logger.record_deleted(id).await.expect("delete entry");

    assert!(first.id() < second.id());
    assert!(second.id() < third.id());
    assert_eq!(second.description(), "Task 1 was updated");
    assert_eq!(third.description(), "Task 1 was deleted by user");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_honours_ordering_and_window(logger: TestLogger) {
    for raw in 1..=4 {
        logger
            .record_created(TaskActivityId::new(raw))
            .await
            .expect("append should succeed");
    }

    let newest = logger
        .repository()
        .list(ListQuery::newest_first().with_limit(2))
        .await
        .expect("list should succeed");
    let newest_ids: Vec<i64> = newest.iter().map(|e| e.task_id().value()).collect();
    assert_eq!(newest_ids, vec![4, 3]);

    let paged = logger
        .repository()
        .list(ListQuery::oldest_first().with_offset(1).with_limit(2))
        .await
        .expect("list should succeed");
    let paged_ids: Vec<i64> = paged.iter().map(|e| e.task_id().value()).collect();
    assert_eq!(paged_ids, vec![2, 3]);
}
