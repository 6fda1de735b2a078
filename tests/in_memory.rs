//! In-memory service integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `audit_trail_tests`: One history entry per effective mutation
//! - `webhook_flow_tests`: Webhook validation order and partial updates
//! - `listing_tests`: Ordering and pagination of both listings

mod in_memory {
    pub mod helpers;

    mod audit_trail_tests;
    mod listing_tests;
    mod webhook_flow_tests;
}
