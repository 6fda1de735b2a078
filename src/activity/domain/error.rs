//! Error types for task activity parsing and partial-update validation.

use serde_json::Value;
use thiserror::Error;

/// Error returned when a classification value is not a known member.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseClassificationError {
    /// Human-readable name of the classification axis.
    pub kind: &'static str,
    /// The rejected input, as received.
    pub value: String,
}

impl ParseClassificationError {
    /// Creates a parse error for the given axis and raw input.
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Errors produced while turning an untrusted payload into field changes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MergeError {
    /// A candidate value could not be coerced into its declared kind.
    #[error("invalid value {value} for field '{field}'")]
    InvalidFieldValue {
        /// Name of the offending field.
        field: String,
        /// The raw value supplied by the caller.
        value: Value,
    },

    /// The payload shares no keys with the mutable field set.
    #[error("no matching fields to update")]
    NoApplicableFields,

    /// A complete record was required but a mutable field was absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

impl MergeError {
    /// Builds an [`MergeError::InvalidFieldValue`] for `field`.
    #[must_use]
    pub fn invalid_value(field: &str, value: &Value) -> Self {
        Self::InvalidFieldValue {
            field: field.to_owned(),
            value: value.clone(),
        }
    }
}

/// Errors raised while validating task activity identity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityDomainError {
    /// The payload carries no `task_id`.
    #[error("task id is missing")]
    MissingTaskId,

    /// The identifier is not an integer.
    #[error("invalid task id: {0}")]
    InvalidTaskId(String),
}
