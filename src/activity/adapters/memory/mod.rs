//! In-memory adapter implementations for tests and store-less runs.

mod activity;

pub use activity::InMemoryTaskActivityRepository;
