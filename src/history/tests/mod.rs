//! Unit tests for the history module.

mod audit_tests;
mod domain_tests;
