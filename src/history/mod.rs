//! Audit trail of task activity mutations.
//!
//! Every create, update and delete that changes at least one row leaves
//! exactly one [`domain::HistoryEntry`]. Entries are never modified and
//! outlive the records they describe. The module mirrors the layout of
//! [`crate::activity`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The audit logger in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
