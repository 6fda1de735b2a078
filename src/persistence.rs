//! Shared `PostgreSQL` plumbing: connection pool and schema migrations.
//!
//! The pool is opened once at process start and handed to every adapter;
//! dropping the last clone releases the connections.

use diesel::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// `PostgreSQL` connection pool type.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Ordered schema migrations, as `(name, up.sql)` pairs.
pub const MIGRATIONS: &[(&str, &str)] = &[
    (
        "2026-10-01-000000_create_task_activities",
        include_str!("../migrations/2026-10-01-000000_create_task_activities/up.sql"),
    ),
    (
        "2026-10-01-000001_create_histories",
        include_str!("../migrations/2026-10-01-000001_create_histories/up.sql"),
    ),
];

/// Errors raised while opening the pool or migrating the schema.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The connection pool could not be built or a connection checked out.
    #[error("failed to connect to PostgreSQL: {0}")]
    Pool(#[from] PoolError),

    /// A migration script failed.
    #[error("migration {name} failed: {source}")]
    Migration {
        /// Name of the failing migration.
        name: &'static str,
        /// Underlying Diesel error.
        #[source]
        source: diesel::result::Error,
    },

    /// The blocking worker thread panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builds a connection pool for `database_url`.
///
/// Pool construction establishes connections eagerly, so it runs on the
/// blocking thread pool.
///
/// # Errors
///
/// Returns [`PersistenceError::Pool`] when the database is unreachable.
pub async fn connect(database_url: &str, max_size: u32) -> Result<PgPool, PersistenceError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = tokio::task::spawn_blocking(move || Pool::builder().max_size(max_size).build(manager))
        .await??;
    Ok(pool)
}

/// Applies every migration in [`MIGRATIONS`]. The scripts are idempotent.
///
/// # Errors
///
/// Returns [`PersistenceError::Migration`] naming the first failing script.
pub async fn run_migrations(pool: &PgPool) -> Result<(), PersistenceError> {
    let shared = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<(), PersistenceError> {
        let mut connection = shared.get()?;
        for &(name, sql) in MIGRATIONS {
            connection
                .batch_execute(sql)
                .map_err(|source| PersistenceError::Migration { name, source })?;
            tracing::info!(migration = name, "applied migration");
        }
        Ok(())
    })
    .await?
}
