//! Flat key/value record storage.
//!
//! All three collection phases accumulate values into [`Record`]s keyed by
//! schema field keys. Values are stored as the user-facing strings that end
//! up in the persisted row (choice selections store the choice label).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder written for fields skipped by a conditional rule, and shown
/// for fields the user never reached.
pub const NOT_APPLICABLE: &str = "-";

/// An ordered map of field key to collected value.
///
/// Field order for display and persistence always comes from the schema,
/// never from insertion order; the map only answers point lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the stored value, or the `-` placeholder when unset.
    pub fn get_or_placeholder(&self, key: &str) -> &str {
        self.get(key).unwrap_or(NOT_APPLICABLE)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns true if a value is stored for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns true if no values have been stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
