//! Task activity CRUD handlers.
//!
//! Create and replace take urlencoded forms. Every form value arrives as a
//! string and is coerced by the same rules as webhook payloads, so
//! `stage_id=4` and `status=not_started` are accepted.

use std::collections::HashMap;

use crate::activity::{
    domain::{ActivityDomainError, TaskActivity, TaskActivityFields, TaskActivityId},
    services::NewTaskActivity,
};
use crate::api::{ApiResult, AppState, Envelope};
use crate::pagination::ListQuery;
use axum::extract::rejection::{FormRejection, PathRejection, QueryRejection};
use axum::extract::{Form, Path, Query, State};
use serde_json::{Map, Value};

type FormFields = HashMap<String, String>;

/// `GET /task/:task_id`
pub(crate) async fn get_task(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Envelope<TaskActivity>> {
    let Path(raw_id) = path?;
    let activity = state.service().get(TaskActivityId::new(raw_id)).await?;
    Ok(Envelope::success("Task Fetched Successfully", activity))
}

/// `POST /tasks-activity`
pub(crate) async fn create_task(
    State(state): State<AppState>,
    form: Result<Form<FormFields>, FormRejection>,
) -> ApiResult<Envelope<TaskActivity>> {
    let Form(form) = form?;
    let (task_id, fields) = parse_record_form(form)?;
    let activity = state
        .service()
        .create(NewTaskActivity { task_id, fields })
        .await?;
    Ok(Envelope::success("Record added successfully", activity))
}

/// `GET /task-activity`
pub(crate) async fn list_tasks(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Envelope<Vec<TaskActivity>>> {
    let Query(query) = query?;
    let activities = state.service().list(query).await?;
    Ok(Envelope::success(
        "Task activities fetched successfully",
        activities,
    ))
}

/// `PUT /task-activity`
pub(crate) async fn replace_task(
    State(state): State<AppState>,
    form: Result<Form<FormFields>, FormRejection>,
) -> ApiResult<Envelope<TaskActivity>> {
    let Form(form) = form?;
    let (task_id, fields) = parse_record_form(form)?;
    let activity = state.service().replace(task_id, fields).await?;
    Ok(Envelope::success("Task Updated Successfully", activity))
}

/// `DELETE /task-activity`
pub(crate) async fn delete_task(
    State(state): State<AppState>,
    form: Result<Form<FormFields>, FormRejection>,
) -> ApiResult<Envelope<()>> {
    let Form(form) = form?;
    let task_id = parse_task_id(&form)?;
    state.service().delete(task_id).await?;
    Ok(Envelope::done("Task deleted successfully"))
}

fn parse_task_id(form: &FormFields) -> Result<TaskActivityId, ActivityDomainError> {
    form.get("task_id")
        .ok_or(ActivityDomainError::MissingTaskId)?
        .parse()
}

fn parse_record_form(form: FormFields) -> ApiResult<(TaskActivityId, TaskActivityFields)> {
    let task_id = parse_task_id(&form)?;
    let payload: Map<String, Value> = form
        .into_iter()
        .filter(|(key, _)| key != "task_id")
        .map(|(key, value)| (key, Value::String(value)))
        .collect();
    let fields = TaskActivityFields::from_payload(&payload)?;
    Ok((task_id, fields))
}
