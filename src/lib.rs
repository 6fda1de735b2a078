//! Tasktrail: task activity tracking with an audit trail.
//!
//! The crate stores CRM-style task activities, accepts partial updates from
//! external systems through a webhook, and records one history entry for
//! every mutation that changes a row.
//!
//! # Architecture
//!
//! Tasktrail follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Orchestration of domain logic over ports
//!
//! # Modules
//!
//! - [`activity`]: Task activities, the schema registry and selective merge
//! - [`history`]: The append-only audit trail
//! - [`api`]: axum router, JSON envelope and error mapping
//! - [`server`]: Storage selection and process bootstrap

pub mod activity;
pub mod api;
pub mod config;
pub mod history;
pub mod pagination;
pub mod persistence;
pub mod server;
pub mod telemetry;
