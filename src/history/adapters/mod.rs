//! Adapter implementations for history persistence.

pub mod memory;
pub mod postgres;
