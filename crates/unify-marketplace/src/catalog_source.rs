//! Implicit catalog-source resolution.
//!
//! Resolves which catalog source should back a product's operator
//! subscription by reading the subscription state the installation system
//! already wrote: the subscription scoped to the product supplies the
//! catalog-source *name*, while the *namespace* is always derived as
//! `<installation-namespace>-<product>-operator`. The subscription's own
//! `catalogSourceNamespace` field is never trusted for this.

use std::time::Duration;

use async_trait::async_trait;

use unify_core::{NamespacedName, ResourceKind, Subscription};
use unify_storage::{DynStore, ListSelector};

use crate::context::NamespaceContext;
use crate::error::MarketplaceError;

/// Outcome of a reconcile step.
///
/// The default value means "nothing further to reconcile at this layer";
/// a step that wants to be retried on a timer asks for a requeue. Retry
/// policy itself belongs to the owning control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileResult {
    pub requeue_after: Option<Duration>,
}

impl ReconcileResult {
    /// The neutral outcome: done, nothing to requeue.
    #[must_use]
    pub fn done() -> Self {
        Self::default()
    }

    /// Requests another pass after the given delay.
    #[must_use]
    pub fn requeue_after(delay: Duration) -> Self {
        Self {
            requeue_after: Some(delay),
        }
    }

    /// Returns true if no requeue was requested.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.requeue_after.is_none()
    }
}

/// Ownership label the installation system stamps on a product's
/// subscription within the installation namespace. The label carries no
/// value; selection is by key presence.
pub fn subscription_owner_label(product: &str, namespace: &str) -> String {
    format!("operators.coreos.com/{product}.{namespace}")
}

/// The seam between catalog-source resolution and the reconciliation steps
/// consuming it.
///
/// Implementations resolve, per product, the `(name, namespace)` identity of
/// the catalog source that should back that product's subscription, and keep
/// the most recent resolution available to downstream steps.
#[async_trait]
pub trait CatalogSourceReconciler: Send + Sync {
    /// Resolves the catalog source for `product`.
    ///
    /// Idempotent: repeated calls against unchanged external state resolve
    /// the same identity. Implementations mutate only their own in-memory
    /// state; `&mut self` leaves serialization of concurrent calls to the
    /// caller.
    async fn reconcile(&mut self, product: &str) -> Result<ReconcileResult, MarketplaceError>;

    /// The identity resolved by the most recent successful reconcile, if
    /// any.
    fn catalog_source(&self) -> Option<&NamespacedName>;

    fn catalog_source_name(&self) -> Option<&str> {
        self.catalog_source().map(|cs| cs.name.as_str())
    }

    fn catalog_source_namespace(&self) -> Option<&str> {
        self.catalog_source().map(|cs| cs.namespace.as_str())
    }
}

/// Resolves catalog sources for implicit product installations.
///
/// Holds a handle to the resource store and the operator's namespace
/// context; construction performs no I/O. The resolved identity starts
/// unset and is overwritten on every successful reconcile.
pub struct ImplicitCatalogSourceReconciler {
    store: DynStore,
    namespaces: NamespaceContext,
    self_catalog_source: Option<NamespacedName>,
}

impl ImplicitCatalogSourceReconciler {
    pub fn new(store: DynStore, namespaces: NamespaceContext) -> Self {
        Self {
            store,
            namespaces,
            self_catalog_source: None,
        }
    }
}

#[async_trait]
impl CatalogSourceReconciler for ImplicitCatalogSourceReconciler {
    async fn reconcile(&mut self, product: &str) -> Result<ReconcileResult, MarketplaceError> {
        let namespace = self.namespaces.own_namespace().to_string();

        let selector =
            ListSelector::new().with_match(subscription_owner_label(product, &namespace), "");
        let subscriptions = self
            .store
            .list(&ResourceKind::Subscription, &namespace, &selector)
            .await?;

        // Selection policy: first stable match. The store contract sorts
        // list results by name, so repeated calls pick the same record even
        // when several subscriptions carry the ownership label.
        let Some(stored) = subscriptions.first() else {
            return Err(MarketplaceError::SubscriptionNotFound);
        };
        let subscription: Subscription = stored.decode()?;

        // The identity's namespace is derived from the installation
        // namespace and the product, never copied from the subscription's
        // catalogSourceNamespace field.
        let target = NamespacedName::new(
            format!("{namespace}-{product}-operator"),
            subscription.spec.catalog_source,
        );

        if self
            .store
            .get(&ResourceKind::CatalogSource, &target)
            .await?
            .is_none()
        {
            return Err(MarketplaceError::CatalogSourceNotFound);
        }

        tracing::debug!(
            product = %product,
            catalog_source = %target,
            "resolved implicit catalog source"
        );
        self.self_catalog_source = Some(target);

        Ok(ReconcileResult::done())
    }

    fn catalog_source(&self) -> Option<&NamespacedName> {
        self.self_catalog_source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use unify_storage_memory::InMemoryStore;

    const INSTALL_NAMESPACE: &str = "redhat-rhoam-operator";

    fn subscription_for(product: &str, name: &str, catalog_source: &str) -> Value {
        json!({
            "metadata": {
                "name": name,
                "namespace": INSTALL_NAMESPACE,
                "labels": {
                    subscription_owner_label(product, INSTALL_NAMESPACE): ""
                }
            },
            "spec": {
                "catalogSource": catalog_source,
                // Deliberately different from the derived namespace.
                "catalogSourceNamespace": INSTALL_NAMESPACE
            }
        })
    }

    fn catalog_source_in(namespace: &str, name: &str) -> Value {
        json!({
            "metadata": {"name": name, "namespace": namespace},
            "spec": {"sourceType": "grpc"}
        })
    }

    fn reconciler(store: InMemoryStore) -> ImplicitCatalogSourceReconciler {
        ImplicitCatalogSourceReconciler::new(
            Arc::new(store),
            NamespaceContext::new(INSTALL_NAMESPACE),
        )
    }

    #[test]
    fn test_subscription_owner_label() {
        assert_eq!(
            subscription_owner_label("3scale", "redhat-rhoam-operator"),
            "operators.coreos.com/3scale.redhat-rhoam-operator"
        );
    }

    #[test]
    fn test_reconcile_result() {
        assert!(ReconcileResult::done().is_done());
        assert_eq!(ReconcileResult::done(), ReconcileResult::default());

        let requeued = ReconcileResult::requeue_after(Duration::from_secs(30));
        assert!(!requeued.is_done());
        assert_eq!(requeued.requeue_after, Some(Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn test_namespace_is_derived_not_copied() {
        // The subscription claims its catalog source lives in the install
        // namespace; resolution must ignore that and derive its own.
        let store = InMemoryStore::with_objects([
            (
                ResourceKind::Subscription,
                subscription_for("3scale", "rhoam-sub", "redhat-rhoam-cs"),
            ),
            (
                ResourceKind::CatalogSource,
                catalog_source_in("redhat-rhoam-3scale-operator", "redhat-rhoam-cs"),
            ),
        ])
        .unwrap();

        let mut reconciler = reconciler(store);
        reconciler.reconcile("3scale").await.unwrap();

        assert_eq!(
            reconciler.catalog_source_namespace(),
            Some("redhat-rhoam-3scale-operator")
        );
    }

    #[tokio::test]
    async fn test_first_stable_match_wins() {
        let store = InMemoryStore::with_objects([
            (
                ResourceKind::Subscription,
                subscription_for("3scale", "sub-b", "cs-from-b"),
            ),
            (
                ResourceKind::Subscription,
                subscription_for("3scale", "sub-a", "cs-from-a"),
            ),
            (
                ResourceKind::CatalogSource,
                catalog_source_in("redhat-rhoam-3scale-operator", "cs-from-a"),
            ),
        ])
        .unwrap();

        let mut reconciler = reconciler(store);
        reconciler.reconcile("3scale").await.unwrap();

        // sub-a sorts first; its catalog source is the one resolved.
        assert_eq!(reconciler.catalog_source_name(), Some("cs-from-a"));
    }

    #[tokio::test]
    async fn test_selector_is_product_scoped() {
        // A subscription owned by a different product must not satisfy the
        // lookup.
        let store = InMemoryStore::with_objects([
            (
                ResourceKind::Subscription,
                subscription_for("rhsso", "rhsso-sub", "redhat-rhoam-cs"),
            ),
            (
                ResourceKind::CatalogSource,
                catalog_source_in("redhat-rhoam-3scale-operator", "redhat-rhoam-cs"),
            ),
        ])
        .unwrap();

        let mut reconciler = reconciler(store);
        let err = reconciler.reconcile("3scale").await.unwrap_err();

        assert!(matches!(err, MarketplaceError::SubscriptionNotFound));
    }

    #[tokio::test]
    async fn test_malformed_subscription_surfaces_store_error() {
        let store = InMemoryStore::new();
        store
            .insert(
                ResourceKind::Subscription,
                json!({
                    "metadata": {
                        "name": "broken-sub",
                        "namespace": INSTALL_NAMESPACE,
                        "labels": {
                            subscription_owner_label("3scale", INSTALL_NAMESPACE): ""
                        }
                    },
                    "spec": {"catalogSource": 42}
                }),
            )
            .unwrap();

        let mut reconciler = reconciler(store);
        let err = reconciler.reconcile("3scale").await.unwrap_err();

        assert!(matches!(err, MarketplaceError::Store(_)));
        assert!(!err.is_prerequisite_missing());
    }
}
