//! Mapping of service and extractor failures onto HTTP responses.

use super::Envelope;
use crate::activity::{
    domain::{ActivityDomainError, MergeError},
    ports::TaskActivityRepositoryError,
    services::ActivityServiceError,
};
use axum::{
    extract::rejection::{FormRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Result type for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// An HTTP failure rendered as a `{success: false, message}` envelope.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{status}: {message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates an error with an explicit status.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// `400 Bad Request`.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// `404 Not Found` with the fixed task message.
    #[must_use]
    pub fn task_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Task Not Found")
    }

    /// `500 Internal Server Error`. Details stay in the logs.
    #[must_use]
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the client-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Envelope::failure(self.message)).into_response()
    }
}

impl From<ActivityServiceError> for ApiError {
    fn from(err: ActivityServiceError) -> Self {
        match err {
            ActivityServiceError::NotFound(_) => Self::task_not_found(),
            ActivityServiceError::Merge(merge) => merge.into(),
            ActivityServiceError::BadPayload(_) => Self::bad_request(err.to_string()),
            ActivityServiceError::MissingOrInvalidId(domain) => domain.into(),
            ActivityServiceError::Repository(TaskActivityRepositoryError::DuplicateId(id)) => {
                Self::new(
                    StatusCode::CONFLICT,
                    format!("Failed to add record: task {id} already exists"),
                )
            }
            ActivityServiceError::Repository(TaskActivityRepositoryError::Persistence(_))
            | ActivityServiceError::History(_) => {
                tracing::error!(error = %err, "persistence failure");
                Self::internal()
            }
        }
    }
}

impl From<MergeError> for ApiError {
    fn from(err: MergeError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<ActivityDomainError> for ApiError {
    fn from(err: ActivityDomainError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}
