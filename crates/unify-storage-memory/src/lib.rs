//! In-memory resource store backend for the Unify operator.
//!
//! This crate provides an in-memory implementation of the `ResourceStore`
//! trait from `unify-storage`, using papaya lock-free HashMap for concurrent
//! access. It is the backend reconciler tests run against, seeded with
//! fixture objects.
//!
//! # Example
//!
//! ```ignore
//! use unify_core::ResourceKind;
//! use unify_storage_memory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! store.insert(
//!     ResourceKind::CatalogSource,
//!     serde_json::json!({
//!         "metadata": {"name": "redhat-rhoam-cs", "namespace": "redhat-rhoam-3scale-operator"}
//!     }),
//! )?;
//! ```

mod storage;

pub use storage::{InMemoryStore, StorageKey};

// Re-export the ResourceStore trait for convenience
pub use unify_storage::{ResourceStore, StoreError, StoredObject};

/// Creates a new in-memory store as a shareable trait object.
pub fn create_store() -> unify_storage::DynStore {
    std::sync::Arc::new(InMemoryStore::new())
}
