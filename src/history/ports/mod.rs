//! Port contracts for history persistence.

pub mod repository;

#[cfg(test)]
pub use repository::MockHistoryRepository;
pub use repository::{HistoryRepository, HistoryRepositoryError, HistoryRepositoryResult};
