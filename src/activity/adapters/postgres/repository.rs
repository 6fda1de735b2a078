//! `PostgreSQL` repository implementation for task activity storage.

use super::{
    models::{NewTaskActivityRow, TaskActivityChangeset, TaskActivityRow},
    schema::task_activities,
};
use crate::activity::{
    domain::{
        Delta, FieldChange, ParseClassificationError, TaskActivity, TaskActivityFields,
        TaskActivityId,
    },
    ports::{TaskActivityRepository, TaskActivityRepositoryError, TaskActivityRepositoryResult},
};
use crate::pagination::ListQuery;
use crate::persistence::PgPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task activity repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskActivityRepository {
    pool: PgPool,
}

impl PostgresTaskActivityRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskActivityRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskActivityRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(TaskActivityRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskActivityRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskActivityRepository for PostgresTaskActivityRepository {
    async fn find_by_id(
        &self,
        id: TaskActivityId,
    ) -> TaskActivityRepositoryResult<Option<TaskActivity>> {
        self.run_blocking(move |connection| {
            let row = task_activities::table
                .find(id.value())
                .select(TaskActivityRow::as_select())
                .first::<TaskActivityRow>(connection)
                .optional()
                .map_err(TaskActivityRepositoryError::persistence)?;
            row.map(row_to_activity).transpose()
        })
        .await
    }

    async fn create(&self, activity: &TaskActivity) -> TaskActivityRepositoryResult<()> {
        let task_id = activity.task_id();
        let new_row = to_new_row(activity);

        self.run_blocking(move |connection| {
            diesel::insert_into(task_activities::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskActivityRepositoryError::DuplicateId(task_id)
                    }
                    _ => TaskActivityRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn apply_delta(
        &self,
        id: TaskActivityId,
        delta: &Delta,
        written_at: DateTime<Utc>,
    ) -> TaskActivityRepositoryResult<u64> {
        let changeset = to_changeset(delta, written_at);

        self.run_blocking(move |connection| {
            let affected = diesel::update(task_activities::table.find(id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskActivityRepositoryError::persistence)?;
            Ok(affected_rows(affected))
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskActivityId) -> TaskActivityRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(task_activities::table.find(id.value()))
                .execute(connection)
                .map_err(TaskActivityRepositoryError::persistence)?;
            Ok(affected_rows(affected))
        })
        .await
    }

    async fn list(&self, query: ListQuery) -> TaskActivityRepositoryResult<Vec<TaskActivity>> {
        self.run_blocking(move |connection| {
            let mut statement = task_activities::table
                .select(TaskActivityRow::as_select())
                .into_boxed();
            statement = if query.newest_first {
                statement.order(task_activities::row_seq.desc())
            } else {
                statement.order(task_activities::row_seq.asc())
            };
            if let Some(offset) = query.sql_offset() {
                statement = statement.offset(offset);
            }
            if let Some(limit) = query.sql_limit() {
                statement = statement.limit(limit);
            }

            statement
                .load::<TaskActivityRow>(connection)
                .map_err(TaskActivityRepositoryError::persistence)?
                .into_iter()
                .map(row_to_activity)
                .collect()
        })
        .await
    }
}

fn affected_rows(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}

fn to_new_row(activity: &TaskActivity) -> NewTaskActivityRow {
    let fields = activity.fields();
    NewTaskActivityRow {
        task_id: activity.task_id().value(),
        task_name: fields.task_name.clone(),
        task_description: fields.task_description.clone(),
        activity_type_id: fields.activity_type_id,
        activity_type_name: fields.activity_type_name.as_str().to_owned(),
        activity_group_sub_category_id: fields.activity_group_sub_category_id,
        activity_group_sub_category_name: fields
            .activity_group_sub_category_name
            .as_str()
            .to_owned(),
        activity_group_id: fields.activity_group_id,
        activity_group_name: fields.activity_group_name.as_str().to_owned(),
        stage_id: fields.stage_id,
        stage_name: fields.stage_name.as_str().to_owned(),
        core_group_category_id: fields.core_group_category_id,
        core_group_category: fields.core_group_category.as_str().to_owned(),
        core_group_id: fields.core_group_id,
        core_group_name: fields.core_group_name.clone(),
        due_date: fields.due_date,
        action_type: fields.action_type.clone(),
        related_to: fields.related_to.clone(),
        related_to_picture_id: fields.related_to_picture_id,
        related_to_email: fields.related_to_email.clone(),
        related_to_company: fields.related_to_company.clone(),
        assign_to: fields.assign_to.clone(),
        assign_to_picture_id: fields.assign_to_picture_id,
        assign_to_email: fields.assign_to_email.clone(),
        assign_to_company: fields.assign_to_company.clone(),
        notes: fields.notes.clone(),
        status: fields.status.as_str().to_owned(),
        attachment_id: fields.attachment_id,
        attachments: fields.attachments.clone(),
        link_response_id: fields.link_response_id,
        link_object_id: fields.link_object_id,
        created_by: fields.created_by.clone(),
        created_on: activity.created_on(),
    }
}

fn to_changeset(delta: &Delta, written_at: DateTime<Utc>) -> TaskActivityChangeset {
    let mut changeset = TaskActivityChangeset {
        created_on: Some(written_at),
        ..TaskActivityChangeset::default()
    };

    for change in delta.changes() {
        match change {
            FieldChange::TaskName(value) => changeset.task_name = Some(value.clone()),
            FieldChange::TaskDescription(value) => {
                changeset.task_description = Some(value.clone());
            }
            FieldChange::ActivityTypeId(value) => changeset.activity_type_id = Some(*value),
            FieldChange::ActivityTypeName(value) => {
                changeset.activity_type_name = Some(value.as_str().to_owned());
            }
            FieldChange::SubCategoryId(value) => {
                changeset.activity_group_sub_category_id = Some(*value);
            }
            FieldChange::SubCategoryName(value) => {
                changeset.activity_group_sub_category_name = Some(value.as_str().to_owned());
            }
            FieldChange::ActivityGroupId(value) => changeset.activity_group_id = Some(*value),
            FieldChange::ActivityGroupName(value) => {
                changeset.activity_group_name = Some(value.as_str().to_owned());
            }
            FieldChange::StageId(value) => changeset.stage_id = Some(*value),
            FieldChange::StageName(value) => {
                changeset.stage_name = Some(value.as_str().to_owned());
            }
            FieldChange::CoreGroupCategoryId(value) => {
                changeset.core_group_category_id = Some(*value);
            }
            FieldChange::CoreGroupCategory(value) => {
                changeset.core_group_category = Some(value.as_str().to_owned());
            }
            FieldChange::CoreGroupId(value) => changeset.core_group_id = Some(*value),
            FieldChange::CoreGroupName(value) => {
                changeset.core_group_name = Some(value.clone());
            }
            FieldChange::DueDate(value) => changeset.due_date = Some(*value),
            FieldChange::ActionType(value) => changeset.action_type = Some(value.clone()),
            FieldChange::RelatedTo(value) => changeset.related_to = Some(value.clone()),
            FieldChange::RelatedToPictureId(value) => {
                changeset.related_to_picture_id = Some(*value);
            }
            FieldChange::RelatedToEmail(value) => {
                changeset.related_to_email = Some(value.clone());
            }
            FieldChange::RelatedToCompany(value) => {
                changeset.related_to_company = Some(value.clone());
            }
            FieldChange::AssignTo(value) => changeset.assign_to = Some(value.clone()),
            FieldChange::AssignToPictureId(value) => {
                changeset.assign_to_picture_id = Some(*value);
            }
            FieldChange::AssignToEmail(value) => changeset.assign_to_email = Some(value.clone()),
            FieldChange::AssignToCompany(value) => {
                changeset.assign_to_company = Some(value.clone());
            }
            FieldChange::Notes(value) => changeset.notes = Some(value.clone()),
            FieldChange::Status(value) => changeset.status = Some(value.as_str().to_owned()),
            FieldChange::AttachmentId(value) => changeset.attachment_id = Some(*value),
            FieldChange::Attachments(value) => changeset.attachments = Some(value.clone()),
            FieldChange::LinkResponseId(value) => changeset.link_response_id = Some(*value),
            FieldChange::LinkObjectId(value) => changeset.link_object_id = Some(*value),
            FieldChange::CreatedBy(value) => changeset.created_by = Some(value.clone()),
        }
    }
    changeset
}

fn row_to_activity(row: TaskActivityRow) -> TaskActivityRepositoryResult<TaskActivity> {
    let fields = row_to_fields(&row).map_err(TaskActivityRepositoryError::persistence)?;
    Ok(TaskActivity::from_persisted(
        TaskActivityId::new(row.task_id),
        fields,
        row.created_on,
    ))
}

fn row_to_fields(row: &TaskActivityRow) -> Result<TaskActivityFields, ParseClassificationError> {
    Ok(TaskActivityFields {
        task_name: row.task_name.clone(),
        task_description: row.task_description.clone(),
        activity_type_id: row.activity_type_id,
        activity_type_name: row.activity_type_name.as_str().try_into()?,
        activity_group_sub_category_id: row.activity_group_sub_category_id,
        activity_group_sub_category_name: row.activity_group_sub_category_name.as_str().try_into()?,
        activity_group_id: row.activity_group_id,
        activity_group_name: row.activity_group_name.as_str().try_into()?,
        stage_id: row.stage_id,
        stage_name: row.stage_name.as_str().try_into()?,
        core_group_category_id: row.core_group_category_id,
        core_group_category: row.core_group_category.as_str().try_into()?,
        core_group_id: row.core_group_id,
        core_group_name: row.core_group_name.clone(),
        due_date: row.due_date,
        action_type: row.action_type.clone(),
        related_to: row.related_to.clone(),
        related_to_picture_id: row.related_to_picture_id,
        related_to_email: row.related_to_email.clone(),
        related_to_company: row.related_to_company.clone(),
        assign_to: row.assign_to.clone(),
        assign_to_picture_id: row.assign_to_picture_id,
        assign_to_email: row.assign_to_email.clone(),
        assign_to_company: row.assign_to_company.clone(),
        notes: row.notes.clone(),
        status: row.status.as_str().try_into()?,
        attachment_id: row.attachment_id,
        attachments: row.attachments.clone(),
        link_response_id: row.link_response_id,
        link_object_id: row.link_object_id,
        created_by: row.created_by.clone(),
    })
}
