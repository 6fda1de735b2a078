//! Tests for history actions and entries.

use crate::activity::domain::TaskActivityId;
use crate::history::domain::{HistoryAction, HistoryEntry, HistoryEntryId, NewHistoryEntry};
use chrono::{TimeZone, Utc};
use rstest::rstest;

#[rstest]
#[case("create", HistoryAction::Create)]
#[case("UPDATE", HistoryAction::Update)]
#[case(" delete ", HistoryAction::Delete)]
fn action_parses_storage_values(#[case] raw: &str, #[case] expected: HistoryAction) {
    assert_eq!(HistoryAction::try_from(raw), Ok(expected));
}

#[test]
fn action_rejects_unknown_values() {
    let err = HistoryAction::try_from("archive").expect_err("unknown action");
    assert_eq!(err.to_string(), "unknown history action: archive");
}

#[test]
fn entry_serialises_with_lowercase_action() {
    let time = Utc
        .with_ymd_and_hms(2026, 10, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    let entry = HistoryEntry::from_new(
        HistoryEntryId::new(3),
        NewHistoryEntry {
            task_id: TaskActivityId::new(5),
            action: HistoryAction::Update,
            description: "Task 5 was updated".to_owned(),
            time,
        },
    );

    let json = serde_json::to_value(&entry).expect("entry serialises");

    assert_eq!(json["id"], 3);
    assert_eq!(json["task_id"], 5);
    assert_eq!(json["action"], "update");
    assert_eq!(json["description"], "Task 5 was updated");
    assert_eq!(json["time"], "2026-10-01T12:00:00Z");
}
