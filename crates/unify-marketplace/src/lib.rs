//! Catalog-source resolution for products installed by the Unify operator.
//!
//! Every managed product is backed by an operator subscription, and every
//! subscription needs a catalog source. For implicit installations the
//! catalog source is not configured anywhere - it is inferred from the
//! subscription state the installation system already wrote. This crate
//! holds that inference:
//!
//! - [`CatalogSourceReconciler`] - the seam downstream reconciliation steps
//!   depend on
//! - [`ImplicitCatalogSourceReconciler`] - resolves the catalog source for a
//!   product from existing subscription records
//! - [`NamespaceContext`] - the operator's own operating namespace, passed
//!   explicitly instead of read from ambient process environment

mod catalog_source;
mod context;
mod error;

pub use catalog_source::{
    CatalogSourceReconciler, ImplicitCatalogSourceReconciler, ReconcileResult,
    subscription_owner_label,
};
pub use context::{NamespaceContext, WATCH_NAMESPACE_VAR};
pub use error::MarketplaceError;
