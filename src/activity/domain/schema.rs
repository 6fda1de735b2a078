//! Static registry of the task activity attributes that may be mutated.
//!
//! The registry is the single source of truth for partial updates: a payload
//! key is only considered when it names a [`TaskActivityField`], and the
//! field's [`FieldKind`] decides how the raw value is coerced. `task_id` and
//! `created_on` are deliberately absent.

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

/// Classification axis of an enumeration-constrained field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationKind {
    /// [`super::ActivityName`].
    ActivityType,
    /// [`super::SubCategoryName`].
    SubCategory,
    /// [`super::GroupName`].
    Group,
    /// [`super::StageName`].
    Stage,
    /// [`super::GroupCategory`].
    CoreGroupCategory,
    /// [`super::ActivityStatus`].
    Status,
}

/// Kind of value a mutable field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free-form text, optionally capped at `max_len` characters.
    Text {
        /// Maximum length in characters; `None` is unbounded.
        max_len: Option<usize>,
    },
    /// Signed 64-bit integer.
    Integer,
    /// Calendar date in `YYYY-MM-DD` form.
    Date,
    /// Member of a classification enumeration.
    Classification(ClassificationKind),
}

/// Longest value a `VARCHAR(255)` column holds.
pub const SHORT_TEXT_MAX_LEN: usize = 255;

const TEXT: FieldKind = FieldKind::Text { max_len: None };
const SHORT_TEXT: FieldKind = FieldKind::Text {
    max_len: Some(SHORT_TEXT_MAX_LEN),
};

macro_rules! mutable_fields {
    ($($variant:ident => $name:literal : $kind:expr),+ $(,)?) => {
        /// A mutable attribute of a task activity record.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TaskActivityField {
            $(
                #[doc = concat!("The `", $name, "` attribute.")]
                $variant,
            )+
        }

        impl TaskActivityField {
            /// Every mutable field, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the attribute name used in payloads and storage.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Returns the kind of value this field accepts.
            #[must_use]
            pub const fn kind(self) -> FieldKind {
                match self {
                    $(Self::$variant => $kind,)+
                }
            }
        }
    };
}

mutable_fields! {
    TaskName => "task_name": TEXT,
    TaskDescription => "task_description": TEXT,
    ActivityTypeId => "activity_type_id": FieldKind::Integer,
    ActivityTypeName => "activity_type_name":
        FieldKind::Classification(ClassificationKind::ActivityType),
    SubCategoryId => "activity_group_sub_category_id": FieldKind::Integer,
    SubCategoryName => "activity_group_sub_category_name":
        FieldKind::Classification(ClassificationKind::SubCategory),
    ActivityGroupId => "activity_group_id": FieldKind::Integer,
    ActivityGroupName => "activity_group_name":
        FieldKind::Classification(ClassificationKind::Group),
    StageId => "stage_id": FieldKind::Integer,
    StageName => "stage_name": FieldKind::Classification(ClassificationKind::Stage),
    CoreGroupCategoryId => "core_group_category_id": FieldKind::Integer,
    CoreGroupCategory => "core_group_category":
        FieldKind::Classification(ClassificationKind::CoreGroupCategory),
    CoreGroupId => "core_group_id": FieldKind::Integer,
    CoreGroupName => "core_group_name": TEXT,
    DueDate => "due_date": FieldKind::Date,
    ActionType => "action_type": SHORT_TEXT,
    RelatedTo => "related_to": SHORT_TEXT,
    RelatedToPictureId => "related_to_picture_id": FieldKind::Integer,
    RelatedToEmail => "related_to_email": SHORT_TEXT,
    RelatedToCompany => "related_to_company": SHORT_TEXT,
    AssignTo => "assign_to": SHORT_TEXT,
    AssignToPictureId => "assign_to_picture_id": FieldKind::Integer,
    AssignToEmail => "assign_to_email": SHORT_TEXT,
    AssignToCompany => "assign_to_company": SHORT_TEXT,
    Notes => "notes": TEXT,
    Status => "status": FieldKind::Classification(ClassificationKind::Status),
    AttachmentId => "attachment_id": FieldKind::Integer,
    Attachments => "attachments": SHORT_TEXT,
    LinkResponseId => "link_response_id": FieldKind::Integer,
    LinkObjectId => "link_object_id": FieldKind::Integer,
    CreatedBy => "created_by": SHORT_TEXT,
}

static GLOBAL: Lazy<SchemaRegistry> = Lazy::new(SchemaRegistry::new);

/// Name-indexed lookup over [`TaskActivityField`].
///
/// Built once and never mutated; [`SchemaRegistry::global`] returns the
/// process-wide instance.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    by_name: HashMap<&'static str, TaskActivityField>,
}

impl SchemaRegistry {
    /// Builds a registry covering every [`TaskActivityField`].
    #[must_use]
    pub fn new() -> Self {
        let by_name = TaskActivityField::ALL
            .iter()
            .map(|field| (field.name(), *field))
            .collect();
        Self { by_name }
    }

    /// Returns the shared registry.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Resolves a payload key to its field, if the key is mutable.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<TaskActivityField> {
        self.by_name.get(name).copied()
    }

    /// Returns the kind of the named field, or `None` when the name is not a
    /// mutable attribute.
    #[must_use]
    pub fn field_kind(&self, name: &str) -> Option<FieldKind> {
        self.lookup(name).map(TaskActivityField::kind)
    }

    /// Returns `true` when `name` is a mutable attribute.
    #[must_use]
    pub fn is_mutable(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns the names of every mutable attribute.
    #[must_use]
    pub fn mutable_field_names(&self) -> BTreeSet<&'static str> {
        self.by_name.keys().copied().collect()
    }

    /// Iterates mutable fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = TaskActivityField> + '_ {
        TaskActivityField::ALL
            .iter()
            .copied()
            .filter(|field| self.by_name.contains_key(field.name()))
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
