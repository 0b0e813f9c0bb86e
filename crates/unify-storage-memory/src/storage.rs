use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use papaya::HashMap as PapayaHashMap;
use serde_json::Value;

use unify_core::{NamespacedName, ResourceKind};
use unify_storage::{ListSelector, ObjectList, ResourceStore, StoreError, StoredObject};

pub type StorageKey = String; // Format: "Kind/namespace/name"

pub(crate) fn make_storage_key(kind: &ResourceKind, name: &NamespacedName) -> StorageKey {
    format!("{kind}/{}/{}", name.namespace, name.name)
}

/// Extracts metadata.name from a JSON object payload.
fn extract_name(object: &Value) -> Result<String, StoreError> {
    object
        .pointer("/metadata/name")
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| StoreError::invalid_object("Missing metadata.name field"))
}

/// Extracts metadata.namespace from a JSON object payload.
fn extract_namespace(object: &Value) -> Result<String, StoreError> {
    object
        .pointer("/metadata/namespace")
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| StoreError::invalid_object("Missing metadata.namespace field"))
}

/// Extracts metadata.labels from a JSON object payload.
fn extract_labels(object: &Value) -> BTreeMap<String, String> {
    object
        .pointer("/metadata/labels")
        .and_then(|v| v.as_object())
        .map(|labels| {
            labels
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

/// In-memory resource store backend using papaya lock-free HashMap.
///
/// This store implementation provides:
/// - Lock-free concurrent access via papaya::HashMap
/// - Point reads by namespaced name
/// - Namespace-scoped, label-filtered lists with name-sorted results
/// - Fixture seeding via [`InMemoryStore::insert`] and
///   [`InMemoryStore::with_objects`]
#[derive(Debug)]
pub struct InMemoryStore {
    /// Main storage using papaya for lock-free concurrent access
    data: Arc<PapayaHashMap<StorageKey, StoredObject>>,
    /// Atomic counter for generating resource versions
    version_counter: AtomicU64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(PapayaHashMap::new()),
            version_counter: AtomicU64::new(1),
        }
    }

    /// Creates a store pre-seeded with the given objects.
    ///
    /// # Errors
    ///
    /// Returns the first seeding error (malformed payload or duplicate key).
    pub fn with_objects(
        objects: impl IntoIterator<Item = (ResourceKind, Value)>,
    ) -> Result<Self, StoreError> {
        let store = Self::new();
        for (kind, object) in objects {
            store.insert(kind, object)?;
        }
        Ok(store)
    }

    /// Generates the next resource version.
    fn next_version(&self) -> String {
        self.version_counter
            .fetch_add(1, Ordering::SeqCst)
            .to_string()
    }

    /// Inserts an object, extracting its identity from `metadata`.
    ///
    /// The stored payload gets a `metadata.resourceVersion` stamp.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidObject` if `metadata.name` or
    /// `metadata.namespace` is missing, and `StoreError::AlreadyExists` if an
    /// object with the same kind and namespaced name is present.
    pub fn insert(&self, kind: ResourceKind, object: Value) -> Result<StoredObject, StoreError> {
        let name = extract_name(&object)?;
        let namespace = extract_namespace(&object)?;
        let target = NamespacedName::new(namespace.clone(), name.clone());
        let key = make_storage_key(&kind, &target);
        let version = self.next_version();

        let mut object = object;
        if let Some(meta) = object.get_mut("metadata").and_then(|m| m.as_object_mut()) {
            meta.insert(
                "resourceVersion".to_string(),
                Value::String(version.clone()),
            );
        }

        let stored = StoredObject::new(name, namespace, kind.to_string(), object, version);

        let guard = self.data.pin();
        if guard.get(&key).is_some() {
            return Err(StoreError::already_exists(kind, target.to_string()));
        }
        guard.insert(key, stored.clone());

        Ok(stored)
    }

    /// Removes an object by kind and namespaced name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the object does not exist.
    pub fn remove(&self, kind: &ResourceKind, name: &NamespacedName) -> Result<(), StoreError> {
        let key = make_storage_key(kind, name);
        let guard = self.data.pin();
        guard
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(kind.clone(), name.to_string()))
    }

    /// Returns the number of stored objects.
    pub fn len(&self) -> usize {
        self.data.pin().len()
    }

    /// Returns true if the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.data.pin().is_empty()
    }
}

#[async_trait]
impl ResourceStore for InMemoryStore {
    async fn get(
        &self,
        kind: &ResourceKind,
        name: &NamespacedName,
    ) -> Result<Option<StoredObject>, StoreError> {
        let key = make_storage_key(kind, name);
        let guard = self.data.pin();
        Ok(guard.get(&key).cloned())
    }

    async fn list(
        &self,
        kind: &ResourceKind,
        namespace: &str,
        selector: &ListSelector,
    ) -> Result<ObjectList, StoreError> {
        let kind = kind.to_string();
        let mut items: Vec<StoredObject> = {
            let guard = self.data.pin();
            guard
                .values()
                .filter(|stored| stored.kind == kind && stored.namespace == namespace)
                .filter(|stored| selector.matches(&extract_labels(&stored.object)))
                .cloned()
                .collect()
        };

        // Deterministic order so "first match" selection is stable.
        items.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(ObjectList::with_items(items))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
