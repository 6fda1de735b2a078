//! Task activity tracking.
//!
//! Task activities are CRM-style records with a caller-assigned identifier
//! and a fixed set of mutable attributes. They are created and replaced
//! through forms, patched by external systems through a webhook, and every
//! change is audited through [`crate::history`]. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
