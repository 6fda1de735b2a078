//! Unit tests for the activity module.
//!
//! Domain tests cover parsing and the selective merge without storage;
//! service tests drive the orchestration over in-memory and mocked ports.

mod classification_tests;
mod record_tests;
mod schema_tests;
mod support;
