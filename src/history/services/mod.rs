//! Audit trail services.

mod audit;

pub use audit::AuditLogger;
