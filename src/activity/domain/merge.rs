//! Selective merge of untrusted key/value payloads into a validated delta.
//!
//! The merge never touches storage. It filters payload keys against the
//! [`SchemaRegistry`], coerces each surviving value into its declared kind,
//! and fails as a whole on the first invalid value so that no partial delta
//! can escape.

use super::{Delta, FieldChange, MergeError, SchemaRegistry};
use serde_json::{Map, Value};

/// Computes validated update deltas from loosely-typed payloads.
#[derive(Debug, Clone, Copy)]
pub struct SelectiveMerge<'r> {
    registry: &'r SchemaRegistry,
}

impl<'r> SelectiveMerge<'r> {
    /// Creates a merge engine backed by `registry`.
    #[must_use]
    pub const fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry used for filtering.
    #[must_use]
    pub const fn registry(&self) -> &'r SchemaRegistry {
        self.registry
    }

    /// Turns `payload` into a minimal, validated [`Delta`].
    ///
    /// Keys outside the mutable field set are dropped silently; this
    /// includes `task_id`, so the result never targets the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::InvalidFieldValue`] when any candidate value
    /// fails coercion, or [`MergeError::NoApplicableFields`] when no payload
    /// key names a mutable field.
    pub fn compute_delta(&self, payload: &Map<String, Value>) -> Result<Delta, MergeError> {
        let changes = self
            .registry
            .fields()
            .filter_map(|field| payload.get(field.name()).map(|raw| (field, raw)))
            .map(|(field, raw)| FieldChange::coerce(field, raw))
            .collect::<Result<Vec<_>, _>>()?;

        if changes.is_empty() {
            return Err(MergeError::NoApplicableFields);
        }
        Ok(Delta::from_changes(changes))
    }

    /// Returns payload keys that the merge would drop, sorted by name.
    #[must_use]
    pub fn ignored_keys<'p>(&self, payload: &'p Map<String, Value>) -> Vec<&'p str> {
        let mut ignored: Vec<&str> = payload
            .keys()
            .map(String::as_str)
            .filter(|key| !self.registry.is_mutable(key))
            .collect();
        ignored.sort_unstable();
        ignored
    }
}

impl Default for SelectiveMerge<'static> {
    fn default() -> Self {
        Self::new(SchemaRegistry::global())
    }
}
