//! In-memory append-only history log.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::history::{
    domain::{HistoryEntry, HistoryEntryId, NewHistoryEntry},
    ports::{HistoryRepository, HistoryRepositoryError, HistoryRepositoryResult},
};
use crate::pagination::ListQuery;

/// Thread-safe in-memory history repository.
///
/// Identifiers start at 1 and increase with every append.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryRepository {
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
}

impl InMemoryHistoryRepository {
    /// Creates an empty in-memory history log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: &impl std::fmt::Display) -> HistoryRepositoryError {
    HistoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn append(&self, entry: &NewHistoryEntry) -> HistoryRepositoryResult<HistoryEntry> {
        let mut entries = self.entries.write().map_err(|err| lock_error(&err))?;
        let next = i64::try_from(entries.len())
            .map_err(HistoryRepositoryError::persistence)?
            .saturating_add(1);
        let stored = HistoryEntry::from_new(HistoryEntryId::new(next), entry.clone());
        entries.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, query: ListQuery) -> HistoryRepositoryResult<Vec<HistoryEntry>> {
        let entries = self.entries.read().map_err(|err| lock_error(&err))?;
        Ok(query.window(entries.iter().cloned()))
    }
}
