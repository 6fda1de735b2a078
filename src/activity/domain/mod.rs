//! Domain model for task activity tracking.
//!
//! Holds the task activity aggregate, its classification enumerations, the
//! schema registry of mutable attributes and the selective merge that turns
//! external payloads into validated deltas. Nothing here performs I/O.

mod change;
mod classification;
mod error;
mod ids;
mod merge;
mod record;
mod schema;

pub use change::{Delta, FieldChange};
pub use classification::{
    ActivityName, ActivityStatus, GroupCategory, GroupName, StageName, SubCategoryName,
};
pub use error::{ActivityDomainError, MergeError, ParseClassificationError};
pub use ids::TaskActivityId;
pub use merge::SelectiveMerge;
pub use record::{TaskActivity, TaskActivityFields, storage_timestamp};
pub use schema::{
    ClassificationKind, FieldKind, SHORT_TEXT_MAX_LEN, SchemaRegistry, TaskActivityField,
};
