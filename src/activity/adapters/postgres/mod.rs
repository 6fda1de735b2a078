//! `PostgreSQL` adapters for task activity persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresTaskActivityRepository;
