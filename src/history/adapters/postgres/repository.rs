//! `PostgreSQL` repository implementation for the history log.

use super::{
    models::{HistoryRow, NewHistoryRow},
    schema::histories,
};
use crate::activity::domain::TaskActivityId;
use crate::history::{
    domain::{HistoryAction, HistoryEntry, HistoryEntryId, NewHistoryEntry},
    ports::{HistoryRepository, HistoryRepositoryError, HistoryRepositoryResult},
};
use crate::pagination::ListQuery;
use crate::persistence::PgPool;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed history repository.
#[derive(Debug, Clone)]
pub struct PostgresHistoryRepository {
    pool: PgPool,
}

impl PostgresHistoryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> HistoryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> HistoryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(HistoryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(HistoryRepositoryError::persistence)?
    }
}

#[async_trait]
impl HistoryRepository for PostgresHistoryRepository {
    async fn append(&self, entry: &NewHistoryEntry) -> HistoryRepositoryResult<HistoryEntry> {
        let new_row = NewHistoryRow {
            task_id: entry.task_id.value(),
            action: entry.action.as_str().to_owned(),
            description: entry.description.clone(),
            time: entry.time,
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(histories::table)
                .values(&new_row)
                .returning(HistoryRow::as_returning())
                .get_result::<HistoryRow>(connection)
                .map_err(HistoryRepositoryError::persistence)?;
            row_to_entry(row)
        })
        .await
    }

    async fn list(&self, query: ListQuery) -> HistoryRepositoryResult<Vec<HistoryEntry>> {
        self.run_blocking(move |connection| {
            let mut statement = histories::table
                .select(HistoryRow::as_select())
                .into_boxed();
            statement = if query.newest_first {
                statement.order(histories::id.desc())
            } else {
                statement.order(histories::id.asc())
            };
            if let Some(offset) = query.sql_offset() {
                statement = statement.offset(offset);
            }
            if let Some(limit) = query.sql_limit() {
                statement = statement.limit(limit);
            }

            statement
                .load::<HistoryRow>(connection)
                .map_err(HistoryRepositoryError::persistence)?
                .into_iter()
                .map(row_to_entry)
                .collect()
        })
        .await
    }
}

fn row_to_entry(row: HistoryRow) -> HistoryRepositoryResult<HistoryEntry> {
    let action =
        HistoryAction::try_from(row.action.as_str()).map_err(HistoryRepositoryError::persistence)?;
    Ok(HistoryEntry::from_new(
        HistoryEntryId::new(row.id),
        NewHistoryEntry {
            task_id: TaskActivityId::new(row.task_id),
            action,
            description: row.description,
            time: row.time,
        },
    ))
}
