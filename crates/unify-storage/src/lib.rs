//! # unify-storage
//!
//! Resource store abstraction for the Unify operator.
//!
//! This crate defines the traits and types a declarative resource store must
//! expose to the operator's reconcilers. It does not contain any
//! implementations - those are provided by separate crates.
//!
//! ## Overview
//!
//! The main trait is [`ResourceStore`], which defines the contract for:
//! - Fetching a single object by namespaced name
//! - Listing objects in a namespace by label selector
//!
//! ## Example
//!
//! ```ignore
//! use unify_core::{NamespacedName, ResourceKind};
//! use unify_storage::{ListSelector, ResourceStore, StoreError, StoredObject};
//!
//! async fn find_subscription(
//!     store: &dyn ResourceStore,
//!     namespace: &str,
//! ) -> Result<Option<StoredObject>, StoreError> {
//!     let selector = ListSelector::new().with_match("app", "unify");
//!     let list = store
//!         .list(&ResourceKind::Subscription, namespace, &selector)
//!         .await?;
//!     Ok(list.items.into_iter().next())
//! }
//! ```

mod error;
mod traits;
mod types;

pub use error::{ErrorCategory, StoreError};
pub use traits::ResourceStore;
pub use types::{ListSelector, ObjectList, StoredObject};

/// Type alias for a store result.
pub type StoreResult<T> = Result<T, StoreError>;

/// Type alias for a boxed store trait object.
pub type DynStore = std::sync::Arc<dyn ResourceStore>;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use unify_storage::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ErrorCategory, StoreError};
    pub use crate::traits::ResourceStore;
    pub use crate::types::{ListSelector, ObjectList, StoredObject};
    pub use crate::{DynStore, StoreResult};
}
