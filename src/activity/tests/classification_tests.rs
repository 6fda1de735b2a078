//! Tests for classification parsing and wire labels.

use crate::activity::domain::{
    ActivityName, ActivityStatus, GroupCategory, GroupName, StageName, SubCategoryName,
};
use rstest::rstest;

#[rstest]
#[case("not started", ActivityStatus::NotStarted)]
#[case("not_started", ActivityStatus::NotStarted)]
#[case("  In Progress ", ActivityStatus::InProgress)]
#[case("COMPLETED", ActivityStatus::Completed)]
#[case("waiting_on", ActivityStatus::WaitingOn)]
#[case("differed", ActivityStatus::Differed)]
fn status_accepts_label_and_snake_case(#[case] raw: &str, #[case] expected: ActivityStatus) {
    assert_eq!(ActivityStatus::try_from(raw), Ok(expected));
}

#[rstest]
#[case("employee contact")]
#[case("emplopyee contact")]
#[case("employee_contact")]
fn sub_category_accepts_legacy_misspelling(#[case] raw: &str) {
    assert_eq!(
        SubCategoryName::try_from(raw),
        Ok(SubCategoryName::EmployeeContact)
    );
}

#[test]
fn unknown_value_names_the_axis() {
    let err = StageName::try_from("won").expect_err("not a stage");
    assert_eq!(err.kind, "stage");
    assert_eq!(err.value, "won");
    assert_eq!(err.to_string(), "unknown stage: won");
}

#[test]
fn every_member_round_trips_through_its_label() {
    for status in ActivityStatus::ALL {
        assert_eq!(status.as_str().parse::<ActivityStatus>(), Ok(*status));
    }
    for name in ActivityName::ALL {
        assert_eq!(ActivityName::try_from(name.as_str()), Ok(*name));
    }
    for group in GroupName::ALL {
        assert_eq!(GroupName::try_from(group.as_str()), Ok(*group));
    }
    for category in GroupCategory::ALL {
        assert_eq!(GroupCategory::try_from(category.as_str()), Ok(*category));
    }
}

#[test]
fn serde_uses_human_readable_labels() {
    let json = serde_json::to_value(GroupName::StageHistory).expect("serialises");
    assert_eq!(json, "stage history");

    let parsed: StageName =
        serde_json::from_value(serde_json::json!("mark_as_completed")).expect("deserialises");
    assert_eq!(parsed, StageName::MarkAsCompleted);

    let rejected = serde_json::from_value::<GroupCategory>(serde_json::json!("vendors"));
    assert!(rejected.is_err());
}
