//! Repository port for history persistence.

use crate::history::domain::{HistoryEntry, NewHistoryEntry};
use crate::pagination::ListQuery;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for history repository operations.
pub type HistoryRepositoryResult<T> = Result<T, HistoryRepositoryError>;

/// Append-only history persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Appends an entry and returns it with its assigned identifier.
    async fn append(&self, entry: &NewHistoryEntry) -> HistoryRepositoryResult<HistoryEntry>;

    /// Lists entries in identifier order, windowed by `query`.
    async fn list(&self, query: ListQuery) -> HistoryRepositoryResult<Vec<HistoryEntry>>;
}

/// Errors returned by history repository implementations.
#[derive(Debug, Clone, Error)]
pub enum HistoryRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl HistoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
