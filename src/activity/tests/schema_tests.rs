//! Tests for the schema registry of mutable attributes.

use crate::activity::domain::{
    ClassificationKind, FieldKind, SHORT_TEXT_MAX_LEN, SchemaRegistry, TaskActivityField,
};
use rstest::rstest;

#[test]
fn registry_covers_every_mutable_attribute() {
    let registry = SchemaRegistry::global();
    assert_eq!(
        registry.mutable_field_names().len(),
        TaskActivityField::ALL.len()
    );
    assert_eq!(TaskActivityField::ALL.len(), 31);
}

#[rstest]
#[case("task_id")]
#[case("created_on")]
#[case("bogus_field")]
#[case("Status")]
fn identity_and_unknown_keys_are_not_mutable(#[case] key: &str) {
    let registry = SchemaRegistry::global();
    assert!(!registry.is_mutable(key));
    assert_eq!(registry.field_kind(key), None);
}

#[rstest]
#[case("status", FieldKind::Classification(ClassificationKind::Status))]
#[case("due_date", FieldKind::Date)]
#[case("assign_to_picture_id", FieldKind::Integer)]
#[case("notes", FieldKind::Text { max_len: None })]
#[case("assign_to_email", FieldKind::Text { max_len: Some(SHORT_TEXT_MAX_LEN) })]
#[case(
    "activity_group_sub_category_name",
    FieldKind::Classification(ClassificationKind::SubCategory)
)]
fn field_kinds_match_declarations(#[case] key: &str, #[case] expected: FieldKind) {
    assert_eq!(SchemaRegistry::global().field_kind(key), Some(expected));
}

#[test]
fn fields_iterate_in_declaration_order() {
    let names: Vec<&str> = SchemaRegistry::new()
        .fields()
        .map(TaskActivityField::name)
        .take(3)
        .collect();
    assert_eq!(names, vec!["task_name", "task_description", "activity_type_id"]);
}
