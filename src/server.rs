//! Process bootstrap: storage selection, migrations and the HTTP listener.

use std::sync::Arc;

use crate::activity::adapters::postgres::PostgresTaskActivityRepository;
use crate::api::{self, AppState};
use crate::config::{ConfigError, ServiceConfig};
use crate::history::adapters::postgres::PostgresHistoryRepository;
use crate::persistence::{self, PersistenceError};
use thiserror::Error;

/// Errors that stop the process before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise tracing: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),

    /// The database could not be reached or migrated.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// A command that needs `PostgreSQL` ran without `DATABASE_URL`.
    #[error("DATABASE_URL must be set for this command")]
    MissingDatabaseUrl,

    /// Binding or serving failed.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Selects storage from `config` and builds router state.
///
/// With a database URL the schema is migrated before the state is returned;
/// without one the service runs on in-memory repositories.
///
/// # Errors
///
/// Returns [`StartupError::Persistence`] when the database is unreachable or
/// a migration fails.
pub async fn build_state(config: &ServiceConfig) -> Result<AppState, StartupError> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, using the in-memory store");
        return Ok(AppState::in_memory());
    };

    let pool = persistence::connect(url, config.pool_size).await?;
    persistence::run_migrations(&pool).await?;
    Ok(AppState::new(
        Arc::new(PostgresTaskActivityRepository::new(pool.clone())),
        Arc::new(PostgresHistoryRepository::new(pool)),
    ))
}

/// Serves the API until the listener fails or Ctrl-C is received.
///
/// # Errors
///
/// Returns [`StartupError`] when storage setup, binding or serving fails.
pub async fn serve(config: &ServiceConfig) -> Result<(), StartupError> {
    let state = build_state(config).await?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "starting tasktrail server");

    tokio::select! {
        result = axum::serve(listener, app) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }
    Ok(())
}

/// Applies the embedded migrations and exits.
///
/// # Errors
///
/// Returns [`StartupError::MissingDatabaseUrl`] without a database URL, or
/// [`StartupError::Persistence`] when a migration fails.
pub async fn migrate(config: &ServiceConfig) -> Result<(), StartupError> {
    let url = config
        .database_url
        .as_deref()
        .ok_or(StartupError::MissingDatabaseUrl)?;
    let pool = persistence::connect(url, 1).await?;
    persistence::run_migrations(&pool).await?;
    tracing::info!(count = persistence::MIGRATIONS.len(), "migrations applied");
    Ok(())
}
