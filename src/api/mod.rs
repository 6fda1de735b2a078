//! HTTP surface of the service.
//!
//! Handlers only translate between HTTP and [`TaskActivityService`]: they
//! extract path, query, form or body input, call the service and wrap the
//! outcome in an [`Envelope`]. Failures, including extractor rejections,
//! become [`ApiError`] responses.

mod envelope;
mod error;
mod routes;

use std::sync::Arc;

use crate::activity::{
    adapters::memory::InMemoryTaskActivityRepository, ports::TaskActivityRepository,
    services::TaskActivityService,
};
use crate::history::{adapters::memory::InMemoryHistoryRepository, ports::HistoryRepository};
use axum::{
    Router,
    routing::{get, post},
};
use mockable::DefaultClock;
use tower_http::trace::TraceLayer;

pub use envelope::Envelope;
pub use error::{ApiError, ApiResult};

/// Service type shared by every handler, erased over its storage backend.
pub type SharedService =
    TaskActivityService<dyn TaskActivityRepository, dyn HistoryRepository, DefaultClock>;

/// Router state.
#[derive(Clone)]
pub struct AppState {
    service: Arc<SharedService>,
}

impl AppState {
    /// Builds state over the given repositories.
    #[must_use]
    pub fn new(
        repository: Arc<dyn TaskActivityRepository>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self {
            service: Arc::new(TaskActivityService::new(
                repository,
                history,
                Arc::new(DefaultClock),
            )),
        }
    }

    /// Builds state over fresh in-memory repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryTaskActivityRepository::new()),
            Arc::new(InMemoryHistoryRepository::new()),
        )
    }

    /// Returns the shared service.
    #[must_use]
    pub fn service(&self) -> &SharedService {
        &self.service
    }
}

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/task/:task_id", get(routes::activity::get_task))
        .route("/tasks-activity", post(routes::activity::create_task))
        .route(
            "/task-activity",
            get(routes::activity::list_tasks)
                .put(routes::activity::replace_task)
                .delete(routes::activity::delete_task),
        )
        .route("/histories", get(routes::history::list_histories))
        .route("/webhook", post(routes::webhook::apply_webhook))
        .nest("/health", routes::health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
