//! Task activity aggregate.

use super::{
    ActivityName, ActivityStatus, Delta, FieldChange, GroupCategory, GroupName, MergeError,
    SelectiveMerge, StageName, SubCategoryName, TaskActivityField, TaskActivityId,
};
use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Every mutable attribute of a task activity.
///
/// Relationship and attachment columns are plain values; nothing checks
/// that the referenced people, pictures or attachments exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskActivityFields {
    /// Short task title.
    pub task_name: String,
    /// Longer task description.
    pub task_description: String,
    /// Identifier paired with [`Self::activity_type_name`].
    pub activity_type_id: i64,
    /// Kind of activity.
    pub activity_type_name: ActivityName,
    /// Identifier paired with [`Self::activity_group_sub_category_name`].
    pub activity_group_sub_category_id: i64,
    /// Who the activity involved.
    pub activity_group_sub_category_name: SubCategoryName,
    /// Identifier paired with [`Self::activity_group_name`].
    pub activity_group_id: i64,
    /// Record group the activity belongs to.
    pub activity_group_name: GroupName,
    /// Identifier paired with [`Self::stage_name`].
    pub stage_id: i64,
    /// Pipeline stage.
    pub stage_name: StageName,
    /// Identifier paired with [`Self::core_group_category`].
    pub core_group_category_id: i64,
    /// Core group category.
    pub core_group_category: GroupCategory,
    /// Core group identifier.
    pub core_group_id: i64,
    /// Core group display name.
    pub core_group_name: String,
    /// Date the task is due.
    pub due_date: NaiveDate,
    /// Free-form action label.
    pub action_type: String,
    /// Name of the related party.
    pub related_to: String,
    /// Picture of the related party.
    pub related_to_picture_id: i64,
    /// Email of the related party.
    pub related_to_email: String,
    /// Company of the related party.
    pub related_to_company: String,
    /// Name of the assignee.
    pub assign_to: String,
    /// Picture of the assignee.
    pub assign_to_picture_id: i64,
    /// Email of the assignee.
    pub assign_to_email: String,
    /// Company of the assignee.
    pub assign_to_company: String,
    /// Free-form notes.
    pub notes: String,
    /// Workflow status.
    pub status: ActivityStatus,
    /// Attachment reference.
    pub attachment_id: i64,
    /// Attachment descriptor.
    pub attachments: String,
    /// Linked response reference.
    pub link_response_id: i64,
    /// Linked object reference.
    pub link_object_id: i64,
    /// Author of the record.
    pub created_by: String,
}

impl TaskActivityFields {
    /// Validates a complete set of attributes from a loosely-typed payload.
    ///
    /// Uses the same coercion rules as partial updates; keys that are not
    /// mutable attributes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::MissingField`] for the first absent attribute
    /// and [`MergeError::InvalidFieldValue`] for values of the wrong kind.
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, MergeError> {
        let merge = SelectiveMerge::default();
        if let Some(missing) = merge
            .registry()
            .fields()
            .find(|field| !payload.contains_key(field.name()))
        {
            return Err(MergeError::MissingField(missing.name()));
        }

        let delta = merge.compute_delta(payload)?;
        let mut fields = Self::placeholder();
        delta.apply_to(&mut fields);
        Ok(fields)
    }

    /// Expresses every attribute as a [`FieldChange`], in schema order.
    #[must_use]
    pub fn to_changes(&self) -> Vec<FieldChange> {
        TaskActivityField::ALL
            .iter()
            .map(|field| self.change_for(*field))
            .collect()
    }

    fn change_for(&self, field: TaskActivityField) -> FieldChange {
        use TaskActivityField as F;

        match field {
            F::TaskName => FieldChange::TaskName(self.task_name.clone()),
            F::TaskDescription => FieldChange::TaskDescription(self.task_description.clone()),
            F::ActivityTypeId => FieldChange::ActivityTypeId(self.activity_type_id),
            F::ActivityTypeName => FieldChange::ActivityTypeName(self.activity_type_name),
            F::SubCategoryId => FieldChange::SubCategoryId(self.activity_group_sub_category_id),
            F::SubCategoryName => {
                FieldChange::SubCategoryName(self.activity_group_sub_category_name)
            }
            F::ActivityGroupId => FieldChange::ActivityGroupId(self.activity_group_id),
            F::ActivityGroupName => FieldChange::ActivityGroupName(self.activity_group_name),
            F::StageId => FieldChange::StageId(self.stage_id),
            F::StageName => FieldChange::StageName(self.stage_name),
            F::CoreGroupCategoryId => {
                FieldChange::CoreGroupCategoryId(self.core_group_category_id)
            }
            F::CoreGroupCategory => FieldChange::CoreGroupCategory(self.core_group_category),
            F::CoreGroupId => FieldChange::CoreGroupId(self.core_group_id),
            F::CoreGroupName => FieldChange::CoreGroupName(self.core_group_name.clone()),
            F::DueDate => FieldChange::DueDate(self.due_date),
            F::ActionType => FieldChange::ActionType(self.action_type.clone()),
            F::RelatedTo => FieldChange::RelatedTo(self.related_to.clone()),
            F::RelatedToPictureId => FieldChange::RelatedToPictureId(self.related_to_picture_id),
            F::RelatedToEmail => FieldChange::RelatedToEmail(self.related_to_email.clone()),
            F::RelatedToCompany => FieldChange::RelatedToCompany(self.related_to_company.clone()),
            F::AssignTo => FieldChange::AssignTo(self.assign_to.clone()),
            F::AssignToPictureId => FieldChange::AssignToPictureId(self.assign_to_picture_id),
            F::AssignToEmail => FieldChange::AssignToEmail(self.assign_to_email.clone()),
            F::AssignToCompany => FieldChange::AssignToCompany(self.assign_to_company.clone()),
            F::Notes => FieldChange::Notes(self.notes.clone()),
            F::Status => FieldChange::Status(self.status),
            F::AttachmentId => FieldChange::AttachmentId(self.attachment_id),
            F::Attachments => FieldChange::Attachments(self.attachments.clone()),
            F::LinkResponseId => FieldChange::LinkResponseId(self.link_response_id),
            F::LinkObjectId => FieldChange::LinkObjectId(self.link_object_id),
            F::CreatedBy => FieldChange::CreatedBy(self.created_by.clone()),
        }
    }

    /// Starting point for [`Self::from_payload`]; every attribute is
    /// overwritten before the value escapes.
    fn placeholder() -> Self {
        Self {
            task_name: String::new(),
            task_description: String::new(),
            activity_type_id: 0,
            activity_type_name: ActivityName::Tasks,
            activity_group_sub_category_id: 0,
            activity_group_sub_category_name: SubCategoryName::CustomerContact,
            activity_group_id: 0,
            activity_group_name: GroupName::Contact,
            stage_id: 0,
            stage_name: StageName::New,
            core_group_category_id: 0,
            core_group_category: GroupCategory::Contacts,
            core_group_id: 0,
            core_group_name: String::new(),
            due_date: NaiveDate::default(),
            action_type: String::new(),
            related_to: String::new(),
            related_to_picture_id: 0,
            related_to_email: String::new(),
            related_to_company: String::new(),
            assign_to: String::new(),
            assign_to_picture_id: 0,
            assign_to_email: String::new(),
            assign_to_company: String::new(),
            notes: String::new(),
            status: ActivityStatus::NotStarted,
            attachment_id: 0,
            attachments: String::new(),
            link_response_id: 0,
            link_object_id: 0,
            created_by: String::new(),
        }
    }
}

/// Truncates `at` to the microsecond precision kept by `TIMESTAMPTZ`
/// columns, so a returned record matches what a later read yields.
#[must_use]
pub fn storage_timestamp(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(6)
}

/// Task activity aggregate root.
///
/// `created_on` is re-stamped on every write, not only on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskActivity {
    task_id: TaskActivityId,
    #[serde(flatten)]
    fields: TaskActivityFields,
    created_on: DateTime<Utc>,
}

impl TaskActivity {
    /// Creates a new task activity stamped with the current clock time.
    #[must_use]
    pub fn new(task_id: TaskActivityId, fields: TaskActivityFields, clock: &impl Clock) -> Self {
        Self {
            task_id,
            fields,
            created_on: storage_timestamp(clock.utc()),
        }
    }

    /// Reconstructs a task activity from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        task_id: TaskActivityId,
        fields: TaskActivityFields,
        created_on: DateTime<Utc>,
    ) -> Self {
        Self {
            task_id,
            fields,
            created_on,
        }
    }

    /// Returns the immutable identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskActivityId {
        self.task_id
    }

    /// Returns the mutable attributes.
    #[must_use]
    pub const fn fields(&self) -> &TaskActivityFields {
        &self.fields
    }

    /// Returns the last write timestamp.
    #[must_use]
    pub const fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    /// Applies `delta` and re-stamps `created_on` with `written_at`.
    pub fn apply_delta(&mut self, delta: &Delta, written_at: DateTime<Utc>) {
        delta.apply_to(&mut self.fields);
        self.created_on = written_at;
    }
}
