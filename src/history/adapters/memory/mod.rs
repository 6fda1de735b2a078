//! In-memory history adapter.

mod history;

pub use history::InMemoryHistoryRepository;
