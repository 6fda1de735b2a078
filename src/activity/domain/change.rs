//! Typed field changes and the validated update delta.

use super::{
    ActivityName, ActivityStatus, FieldKind, GroupCategory, GroupName, MergeError, StageName,
    SubCategoryName, TaskActivityField, TaskActivityFields,
};
use chrono::NaiveDate;
use serde_json::Value;

/// A single validated assignment to a mutable field.
///
/// Each variant carries a value of the field's declared kind, so applying a
/// change can never produce a type mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// New `task_name`.
    TaskName(String),
    /// New `task_description`.
    TaskDescription(String),
    /// New `activity_type_id`.
    ActivityTypeId(i64),
    /// New `activity_type_name`.
    ActivityTypeName(ActivityName),
    /// New `activity_group_sub_category_id`.
    SubCategoryId(i64),
    /// New `activity_group_sub_category_name`.
    SubCategoryName(SubCategoryName),
    /// New `activity_group_id`.
    ActivityGroupId(i64),
    /// New `activity_group_name`.
    ActivityGroupName(GroupName),
    /// New `stage_id`.
    StageId(i64),
    /// New `stage_name`.
    StageName(StageName),
    /// New `core_group_category_id`.
    CoreGroupCategoryId(i64),
    /// New `core_group_category`.
    CoreGroupCategory(GroupCategory),
    /// New `core_group_id`.
    CoreGroupId(i64),
    /// New `core_group_name`.
    CoreGroupName(String),
    /// New `due_date`.
    DueDate(NaiveDate),
    /// New `action_type`.
    ActionType(String),
    /// New `related_to`.
    RelatedTo(String),
    /// New `related_to_picture_id`.
    RelatedToPictureId(i64),
    /// New `related_to_email`.
    RelatedToEmail(String),
    /// New `related_to_company`.
    RelatedToCompany(String),
    /// New `assign_to`.
    AssignTo(String),
    /// New `assign_to_picture_id`.
    AssignToPictureId(i64),
    /// New `assign_to_email`.
    AssignToEmail(String),
    /// New `assign_to_company`.
    AssignToCompany(String),
    /// New `notes`.
    Notes(String),
    /// New `status`.
    Status(ActivityStatus),
    /// New `attachment_id`.
    AttachmentId(i64),
    /// New `attachments`.
    Attachments(String),
    /// New `link_response_id`.
    LinkResponseId(i64),
    /// New `link_object_id`.
    LinkObjectId(i64),
    /// New `created_by`.
    CreatedBy(String),
}

impl FieldChange {
    /// Coerces a raw payload value into a change for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::InvalidFieldValue`] when `raw` cannot be read as
    /// the field's declared kind.
    pub fn coerce(field: TaskActivityField, raw: &Value) -> Result<Self, MergeError> {
        use TaskActivityField as F;

        let change = match field {
            F::TaskName => Self::TaskName(text(field, raw)?),
            F::TaskDescription => Self::TaskDescription(text(field, raw)?),
            F::ActivityTypeId => Self::ActivityTypeId(integer(field, raw)?),
            F::ActivityTypeName => Self::ActivityTypeName(classification(field, raw)?),
            F::SubCategoryId => Self::SubCategoryId(integer(field, raw)?),
            F::SubCategoryName => Self::SubCategoryName(classification(field, raw)?),
            F::ActivityGroupId => Self::ActivityGroupId(integer(field, raw)?),
            F::ActivityGroupName => Self::ActivityGroupName(classification(field, raw)?),
            F::StageId => Self::StageId(integer(field, raw)?),
            F::StageName => Self::StageName(classification(field, raw)?),
            F::CoreGroupCategoryId => Self::CoreGroupCategoryId(integer(field, raw)?),
            F::CoreGroupCategory => Self::CoreGroupCategory(classification(field, raw)?),
            F::CoreGroupId => Self::CoreGroupId(integer(field, raw)?),
            F::CoreGroupName => Self::CoreGroupName(text(field, raw)?),
            F::DueDate => Self::DueDate(date(field, raw)?),
            F::ActionType => Self::ActionType(text(field, raw)?),
            F::RelatedTo => Self::RelatedTo(text(field, raw)?),
            F::RelatedToPictureId => Self::RelatedToPictureId(integer(field, raw)?),
            F::RelatedToEmail => Self::RelatedToEmail(text(field, raw)?),
            F::RelatedToCompany => Self::RelatedToCompany(text(field, raw)?),
            F::AssignTo => Self::AssignTo(text(field, raw)?),
            F::AssignToPictureId => Self::AssignToPictureId(integer(field, raw)?),
            F::AssignToEmail => Self::AssignToEmail(text(field, raw)?),
            F::AssignToCompany => Self::AssignToCompany(text(field, raw)?),
            F::Notes => Self::Notes(text(field, raw)?),
            F::Status => Self::Status(classification(field, raw)?),
            F::AttachmentId => Self::AttachmentId(integer(field, raw)?),
            F::Attachments => Self::Attachments(text(field, raw)?),
            F::LinkResponseId => Self::LinkResponseId(integer(field, raw)?),
            F::LinkObjectId => Self::LinkObjectId(integer(field, raw)?),
            F::CreatedBy => Self::CreatedBy(text(field, raw)?),
        };
        Ok(change)
    }

    /// Returns the field this change targets.
    #[must_use]
    pub const fn field(&self) -> TaskActivityField {
        use TaskActivityField as F;

        match self {
            Self::TaskName(_) => F::TaskName,
            Self::TaskDescription(_) => F::TaskDescription,
            Self::ActivityTypeId(_) => F::ActivityTypeId,
            Self::ActivityTypeName(_) => F::ActivityTypeName,
            Self::SubCategoryId(_) => F::SubCategoryId,
            Self::SubCategoryName(_) => F::SubCategoryName,
            Self::ActivityGroupId(_) => F::ActivityGroupId,
            Self::ActivityGroupName(_) => F::ActivityGroupName,
            Self::StageId(_) => F::StageId,
            Self::StageName(_) => F::StageName,
            Self::CoreGroupCategoryId(_) => F::CoreGroupCategoryId,
            Self::CoreGroupCategory(_) => F::CoreGroupCategory,
            Self::CoreGroupId(_) => F::CoreGroupId,
            Self::CoreGroupName(_) => F::CoreGroupName,
            Self::DueDate(_) => F::DueDate,
            Self::ActionType(_) => F::ActionType,
            Self::RelatedTo(_) => F::RelatedTo,
            Self::RelatedToPictureId(_) => F::RelatedToPictureId,
            Self::RelatedToEmail(_) => F::RelatedToEmail,
            Self::RelatedToCompany(_) => F::RelatedToCompany,
            Self::AssignTo(_) => F::AssignTo,
            Self::AssignToPictureId(_) => F::AssignToPictureId,
            Self::AssignToEmail(_) => F::AssignToEmail,
            Self::AssignToCompany(_) => F::AssignToCompany,
            Self::Notes(_) => F::Notes,
            Self::Status(_) => F::Status,
            Self::AttachmentId(_) => F::AttachmentId,
            Self::Attachments(_) => F::Attachments,
            Self::LinkResponseId(_) => F::LinkResponseId,
            Self::LinkObjectId(_) => F::LinkObjectId,
            Self::CreatedBy(_) => F::CreatedBy,
        }
    }

    /// Writes this change into `fields`.
    pub fn apply_to(&self, fields: &mut TaskActivityFields) {
        match self {
            Self::TaskName(value) => fields.task_name.clone_from(value),
            Self::TaskDescription(value) => fields.task_description.clone_from(value),
            Self::ActivityTypeId(value) => fields.activity_type_id = *value,
            Self::ActivityTypeName(value) => fields.activity_type_name = *value,
            Self::SubCategoryId(value) => fields.activity_group_sub_category_id = *value,
            Self::SubCategoryName(value) => fields.activity_group_sub_category_name = *value,
            Self::ActivityGroupId(value) => fields.activity_group_id = *value,
            Self::ActivityGroupName(value) => fields.activity_group_name = *value,
            Self::StageId(value) => fields.stage_id = *value,
            Self::StageName(value) => fields.stage_name = *value,
            Self::CoreGroupCategoryId(value) => fields.core_group_category_id = *value,
            Self::CoreGroupCategory(value) => fields.core_group_category = *value,
            Self::CoreGroupId(value) => fields.core_group_id = *value,
            Self::CoreGroupName(value) => fields.core_group_name.clone_from(value),
            Self::DueDate(value) => fields.due_date = *value,
            Self::ActionType(value) => fields.action_type.clone_from(value),
            Self::RelatedTo(value) => fields.related_to.clone_from(value),
            Self::RelatedToPictureId(value) => fields.related_to_picture_id = *value,
            Self::RelatedToEmail(value) => fields.related_to_email.clone_from(value),
            Self::RelatedToCompany(value) => fields.related_to_company.clone_from(value),
            Self::AssignTo(value) => fields.assign_to.clone_from(value),
            Self::AssignToPictureId(value) => fields.assign_to_picture_id = *value,
            Self::AssignToEmail(value) => fields.assign_to_email.clone_from(value),
            Self::AssignToCompany(value) => fields.assign_to_company.clone_from(value),
            Self::Notes(value) => fields.notes.clone_from(value),
            Self::Status(value) => fields.status = *value,
            Self::AttachmentId(value) => fields.attachment_id = *value,
            Self::Attachments(value) => fields.attachments.clone_from(value),
            Self::LinkResponseId(value) => fields.link_response_id = *value,
            Self::LinkObjectId(value) => fields.link_object_id = *value,
            Self::CreatedBy(value) => fields.created_by.clone_from(value),
        }
    }
}

fn text(field: TaskActivityField, raw: &Value) -> Result<String, MergeError> {
    let max_len = match field.kind() {
        FieldKind::Text { max_len } => max_len,
        _ => None,
    };
    raw.as_str()
        .filter(|value| max_len.is_none_or(|max| value.chars().count() <= max))
        .map(str::to_owned)
        .ok_or_else(|| MergeError::invalid_value(field.name(), raw))
}

fn integer(field: TaskActivityField, raw: &Value) -> Result<i64, MergeError> {
    let parsed = match raw {
        Value::Number(number) => number.as_i64(),
        Value::String(digits) => digits.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| MergeError::invalid_value(field.name(), raw))
}

fn date(field: TaskActivityField, raw: &Value) -> Result<NaiveDate, MergeError> {
    raw.as_str()
        .and_then(|value| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok())
        .ok_or_else(|| MergeError::invalid_value(field.name(), raw))
}

fn classification<T>(field: TaskActivityField, raw: &Value) -> Result<T, MergeError>
where
    T: for<'a> TryFrom<&'a str>,
{
    raw.as_str()
        .and_then(|value| T::try_from(value).ok())
        .ok_or_else(|| MergeError::invalid_value(field.name(), raw))
}

/// Ordered, validated set of field changes for one task activity.
///
/// Changes follow schema declaration order, so descriptions built from a
/// delta are deterministic regardless of payload key order. A delta never
/// targets `task_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    changes: Vec<FieldChange>,
}

impl Delta {
    /// Builds a delta from changes, keeping only the last change per field
    /// and sorting by schema order.
    #[must_use]
    pub fn from_changes(changes: impl IntoIterator<Item = FieldChange>) -> Self {
        let mut collected: Vec<FieldChange> = Vec::new();
        for change in changes {
            collected.retain(|existing| existing.field() != change.field());
            collected.push(change);
        }
        collected.sort_by_key(FieldChange::field);
        Self { changes: collected }
    }

    /// Builds a delta that overwrites every mutable field.
    #[must_use]
    pub fn replacing(fields: &TaskActivityFields) -> Self {
        Self {
            changes: fields.to_changes(),
        }
    }

    /// Returns the changes in schema order.
    #[must_use]
    pub fn changes(&self) -> &[FieldChange] {
        &self.changes
    }

    /// Returns the names of the changed fields in schema order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        self.changes
            .iter()
            .map(|change| change.field().name())
            .collect()
    }

    /// Returns `true` when the delta touches `field`.
    #[must_use]
    pub fn touches(&self, field: TaskActivityField) -> bool {
        self.changes.iter().any(|change| change.field() == field)
    }

    /// Returns the number of changed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns `true` when no field is changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Applies every change to `fields`.
    pub fn apply_to(&self, fields: &mut TaskActivityFields) {
        for change in &self.changes {
            change.apply_to(fields);
        }
    }
}
