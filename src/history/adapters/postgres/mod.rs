//! `PostgreSQL` adapter for history persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresHistoryRepository;
