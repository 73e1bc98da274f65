//! Named attribute storage.
//!
//! Entities and actions both carry an [`AttributeStore`]: a flat map
//! from attribute name to [`Value`]. Hierarchical lookup between
//! entities lives in the world layer; the store itself is local only.

use std::collections::HashMap;

use crate::value::Value;

/// A mutable map of named attribute values.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeStore {
    values: HashMap<String, Value>,
}

impl AttributeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    /// Number of attributes present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates attribute names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
