//! Route handlers grouped by resource.

pub(super) mod activity;
pub(super) mod health;
pub(super) mod history;
pub(super) mod webhook;
