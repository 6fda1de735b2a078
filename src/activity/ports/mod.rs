//! Port contracts for task activity persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by activity services.

pub mod repository;

#[cfg(test)]
pub use repository::MockTaskActivityRepository;
pub use repository::{
    TaskActivityRepository, TaskActivityRepositoryError, TaskActivityRepositoryResult,
};
