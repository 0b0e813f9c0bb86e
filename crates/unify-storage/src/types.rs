//! Store types for the resource store abstraction layer.
//!
//! This module defines all data types used by the store trait.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::StoreError;

/// An object as held by a store backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredObject {
    /// The object name.
    pub name: String,
    /// The namespace the object lives in.
    pub namespace: String,
    /// The declarative kind (e.g. "Subscription", "CatalogSource").
    pub kind: String,
    /// The full object content as JSON.
    pub object: Value,
    /// The store's version stamp for this object.
    pub resource_version: String,
}

impl StoredObject {
    /// Creates a new `StoredObject`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        kind: impl Into<String>,
        object: Value,
        resource_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            kind: kind.into(),
            object,
            resource_version: resource_version.into(),
        }
    }

    /// Deserializes the object payload into a typed record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidObject` if the payload does not match the
    /// target type.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        serde_json::from_value(self.object.clone()).map_err(|e| {
            StoreError::invalid_object(format!("{}/{} is not a valid {}: {e}", self.namespace, self.name, self.kind))
        })
    }
}

/// Result of a list operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectList {
    /// The matching objects, sorted by name.
    pub items: Vec<StoredObject>,
}

impl ObjectList {
    /// Creates a new empty `ObjectList`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a new `ObjectList` with items.
    #[must_use]
    pub fn with_items(items: Vec<StoredObject>) -> Self {
        Self { items }
    }

    /// Returns the first item, if any.
    #[must_use]
    pub fn first(&self) -> Option<&StoredObject> {
        self.items.first()
    }

    /// Returns the number of items in this list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Label selector for a list operation.
///
/// Selection is by label equality. Multiple entries must all match
/// (AND semantics); an empty selector matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSelector {
    /// Required label key/value pairs.
    pub match_labels: BTreeMap<String, String>,
}

impl ListSelector {
    /// Creates a new empty `ListSelector`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required label equality match.
    #[must_use]
    pub fn with_match(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.match_labels.insert(key.into(), value.into());
        self
    }

    /// Returns true if this selector has no requirements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.match_labels.is_empty()
    }

    /// Returns true if the given label set satisfies every requirement.
    #[must_use]
    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        self.match_labels
            .iter()
            .all(|(key, value)| labels.get(key).map(|v| v == value).unwrap_or(false))
    }
}
