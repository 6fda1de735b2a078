//! Domain model for the task activity audit trail.

mod entry;

pub use entry::{
    HistoryAction, HistoryEntry, HistoryEntryId, NewHistoryEntry, ParseHistoryActionError,
};
