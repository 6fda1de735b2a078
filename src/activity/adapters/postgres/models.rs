//! Diesel row models for task activity persistence.

use super::schema::task_activities;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task activity records.
///
/// `row_seq` is internal to the adapter and never selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskActivityRow {
    pub task_id: i64,
    pub task_name: String,
    pub task_description: String,
    pub activity_type_id: i64,
    pub activity_type_name: String,
    pub activity_group_sub_category_id: i64,
    pub activity_group_sub_category_name: String,
    pub activity_group_id: i64,
    pub activity_group_name: String,
    pub stage_id: i64,
    pub stage_name: String,
    pub core_group_category_id: i64,
    pub core_group_category: String,
    pub core_group_id: i64,
    pub core_group_name: String,
    pub due_date: NaiveDate,
    pub action_type: String,
    pub related_to: String,
    pub related_to_picture_id: i64,
    pub related_to_email: String,
    pub related_to_company: String,
    pub assign_to: String,
    pub assign_to_picture_id: i64,
    pub assign_to_email: String,
    pub assign_to_company: String,
    pub notes: String,
    pub status: String,
    pub attachment_id: i64,
    pub attachments: String,
    pub link_response_id: i64,
    pub link_object_id: i64,
    pub created_by: String,
    pub created_on: DateTime<Utc>,
}

/// Insert model for task activity records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_activities)]
pub struct NewTaskActivityRow {
    pub task_id: i64,
    pub task_name: String,
    pub task_description: String,
    pub activity_type_id: i64,
    pub activity_type_name: String,
    pub activity_group_sub_category_id: i64,
    pub activity_group_sub_category_name: String,
    pub activity_group_id: i64,
    pub activity_group_name: String,
    pub stage_id: i64,
    pub stage_name: String,
    pub core_group_category_id: i64,
    pub core_group_category: String,
    pub core_group_id: i64,
    pub core_group_name: String,
    pub due_date: NaiveDate,
    pub action_type: String,
    pub related_to: String,
    pub related_to_picture_id: i64,
    pub related_to_email: String,
    pub related_to_company: String,
    pub assign_to: String,
    pub assign_to_picture_id: i64,
    pub assign_to_email: String,
    pub assign_to_company: String,
    pub notes: String,
    pub status: String,
    pub attachment_id: i64,
    pub attachments: String,
    pub link_response_id: i64,
    pub link_object_id: i64,
    pub created_by: String,
    pub created_on: DateTime<Utc>,
}

/// Sparse update model; `None` columns are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = task_activities)]
pub struct TaskActivityChangeset {
    pub task_name: Option<String>,
    pub task_description: Option<String>,
    pub activity_type_id: Option<i64>,
    pub activity_type_name: Option<String>,
    pub activity_group_sub_category_id: Option<i64>,
    pub activity_group_sub_category_name: Option<String>,
    pub activity_group_id: Option<i64>,
    pub activity_group_name: Option<String>,
    pub stage_id: Option<i64>,
    pub stage_name: Option<String>,
    pub core_group_category_id: Option<i64>,
    pub core_group_category: Option<String>,
    pub core_group_id: Option<i64>,
    pub core_group_name: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub action_type: Option<String>,
    pub related_to: Option<String>,
    pub related_to_picture_id: Option<i64>,
    pub related_to_email: Option<String>,
    pub related_to_company: Option<String>,
    pub assign_to: Option<String>,
    pub assign_to_picture_id: Option<i64>,
    pub assign_to_email: Option<String>,
    pub assign_to_company: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub attachment_id: Option<i64>,
    pub attachments: Option<String>,
    pub link_response_id: Option<i64>,
    pub link_object_id: Option<i64>,
    pub created_by: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
}
