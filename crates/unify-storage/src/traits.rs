//! Store traits for the resource store abstraction layer.
//!
//! This module defines the core trait that all store backends must implement.

use async_trait::async_trait;

use unify_core::{NamespacedName, ResourceKind};

use crate::error::StoreError;
use crate::types::{ListSelector, ObjectList, StoredObject};

/// The read capability every declarative resource store must provide.
///
/// This trait defines the contract the operator's reconcilers depend on:
/// point reads by namespaced name and namespace-scoped, label-filtered
/// lists. Implementations must be thread-safe (`Send + Sync`). Both calls
/// may block on external I/O; dropping the returned future cancels the
/// pending operation.
///
/// # Example
///
/// ```ignore
/// use unify_storage::{ResourceStore, StoreError, StoredObject};
///
/// async fn get_catalog_source(
///     store: &dyn ResourceStore,
///     target: &NamespacedName,
/// ) -> Result<StoredObject, StoreError> {
///     store
///         .get(&ResourceKind::CatalogSource, target)
///         .await?
///         .ok_or_else(|| StoreError::not_found(ResourceKind::CatalogSource, target.to_string()))
/// }
/// ```
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Fetches a single object by kind and namespaced name.
    ///
    /// Returns `None` if the object does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues, not for missing
    /// objects.
    async fn get(
        &self,
        kind: &ResourceKind,
        name: &NamespacedName,
    ) -> Result<Option<StoredObject>, StoreError>;

    /// Lists objects of a kind within one namespace, filtered by label
    /// selector.
    ///
    /// An empty selector matches every object of the kind in the namespace.
    /// Implementations must return items in a deterministic order (sorted
    /// by object name) so that "first match" selection is stable across
    /// calls.
    ///
    /// # Errors
    ///
    /// Returns an error for infrastructure issues or invalid parameters.
    async fn list(
        &self,
        kind: &ResourceKind,
        namespace: &str,
        selector: &ListSelector,
    ) -> Result<ObjectList, StoreError>;

    /// Returns the name of this store backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}
