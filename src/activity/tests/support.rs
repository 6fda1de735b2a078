//! Shared payload fixtures.

use crate::activity::domain::TaskActivityFields;
use serde_json::{Map, Value, json};

/// A complete, valid attribute payload as a client would post it.
pub(super) fn sample_payload() -> Map<String, Value> {
    let value = json!({
        "task_name": "Follow up on proposal",
        "task_description": "Send the revised quote",
        "activity_type_id": 1,
        "activity_type_name": "calls",
        "activity_group_sub_category_id": 2,
        "activity_group_sub_category_name": "customer contact",
        "activity_group_id": 3,
        "activity_group_name": "quotes",
        "stage_id": 4,
        "stage_name": "proposal creation",
        "core_group_category_id": 5,
        "core_group_category": "leads",
        "core_group_id": 6,
        "core_group_name": "Northwind",
        "due_date": "2026-11-02",
        "action_type": "call",
        "related_to": "Dana Reyes",
        "related_to_picture_id": 7,
        "related_to_email": "dana@example.com",
        "related_to_company": "Northwind",
        "assign_to": "Sam Okafor",
        "assign_to_picture_id": 8,
        "assign_to_email": "sam@example.com",
        "assign_to_company": "Acme",
        "notes": "Prefers mornings",
        "status": "not started",
        "attachment_id": 9,
        "attachments": "quote-v2.pdf",
        "link_response_id": 10,
        "link_object_id": 11,
        "created_by": "sam",
    });
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

/// Validated attributes built from [`sample_payload`].
pub(super) fn sample_fields() -> TaskActivityFields {
    TaskActivityFields::from_payload(&sample_payload()).expect("sample payload is valid")
}
