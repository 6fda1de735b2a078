//! Adapter implementations of the task activity ports.

pub mod memory;
pub mod postgres;
