//! Identifier types for the task activity domain.

use super::ActivityDomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Caller-assigned identifier of a task activity record.
///
/// The value is chosen by the client on creation and never changes
/// afterwards; the store enforces uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskActivityId(i64);

impl TaskActivityId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Reads an identifier from a JSON value, accepting integers only.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::InvalidTaskId`] for strings, floats,
    /// `null` and every other non-integer value.
    pub fn from_json(value: &Value) -> Result<Self, ActivityDomainError> {
        value
            .as_i64()
            .map(Self)
            .ok_or_else(|| ActivityDomainError::InvalidTaskId(value.to_string()))
    }
}

impl FromStr for TaskActivityId {
    type Err = ActivityDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ActivityDomainError::InvalidTaskId(s.to_owned()))
    }
}

impl From<i64> for TaskActivityId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
