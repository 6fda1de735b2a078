//! Orchestration services for task activities.

mod activity;

pub use activity::{
    ActivityServiceError, ActivityServiceResult, NewTaskActivity, TaskActivityService,
    WebhookUpdate,
};
