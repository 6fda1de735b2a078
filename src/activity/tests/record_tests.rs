//! Tests for the task activity aggregate.

use super::support::sample_fields;
use crate::activity::domain::{TaskActivity, TaskActivityId, storage_timestamp};
use chrono::{DateTime, TimeZone, Timelike, Utc};
use mockable::DefaultClock;

fn at_nanos(nanos: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0)
        .single()
        .and_then(|moment| moment.with_nanosecond(nanos))
        .expect("valid timestamp")
}

#[test]
fn storage_timestamp_drops_sub_microsecond_digits() {
    assert_eq!(storage_timestamp(at_nanos(123_456_789)), at_nanos(123_456_000));
    assert_eq!(storage_timestamp(at_nanos(999_999_999)), at_nanos(999_999_000));
    assert_eq!(storage_timestamp(at_nanos(42_000)), at_nanos(42_000));
}

#[test]
fn new_records_are_stamped_at_storage_precision() {
    let activity = TaskActivity::new(TaskActivityId::new(1), sample_fields(), &DefaultClock);

    assert_eq!(activity.created_on().timestamp_subsec_nanos() % 1_000, 0);
}
