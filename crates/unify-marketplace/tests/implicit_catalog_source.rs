//! End-to-end scenarios for implicit catalog-source resolution against a
//! seeded in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use unify_core::{NamespacedName, ResourceKind};
use unify_marketplace::{
    CatalogSourceReconciler, ImplicitCatalogSourceReconciler, NamespaceContext,
    subscription_owner_label,
};
use unify_storage::{ListSelector, ObjectList, ResourceStore, StoreError, StoredObject};
use unify_storage_memory::InMemoryStore;

const INSTALL_NAMESPACE: &str = "redhat-rhoam-operator";
const PRODUCT: &str = "3scale";
const EXPECTED_ERROR: &str = "catalog source not found for implicit product installation type";

fn rhoam_subscription() -> (ResourceKind, Value) {
    (
        ResourceKind::Subscription,
        json!({
            "metadata": {
                "name": "managed-api-sub",
                "namespace": INSTALL_NAMESPACE,
                "labels": {
                    subscription_owner_label(PRODUCT, INSTALL_NAMESPACE): ""
                }
            },
            "spec": {
                "package": "managed-api-service",
                "channel": "stable",
                "catalogSource": "redhat-rhoam-cs",
                "catalogSourceNamespace": INSTALL_NAMESPACE
            }
        }),
    )
}

fn rhoam_catalog_source() -> (ResourceKind, Value) {
    (
        ResourceKind::CatalogSource,
        json!({
            "metadata": {
                "name": "redhat-rhoam-cs",
                "namespace": "redhat-rhoam-3scale-operator"
            },
            "spec": {"sourceType": "grpc", "publisher": "Red Hat"}
        }),
    )
}

fn reconciler_with(objects: Vec<(ResourceKind, Value)>) -> ImplicitCatalogSourceReconciler {
    let store = InMemoryStore::with_objects(objects).expect("seeding fixtures failed");
    ImplicitCatalogSourceReconciler::new(Arc::new(store), NamespaceContext::new(INSTALL_NAMESPACE))
}

#[tokio::test]
async fn test_implicit_catalog_source_reconcile() {
    struct Case {
        name: &'static str,
        objects: Vec<(ResourceKind, Value)>,
        expected_error: Option<&'static str>,
        verify_catalog_source: bool,
    }

    let cases = vec![
        Case {
            name: "subscription and catalog source present",
            objects: vec![rhoam_subscription(), rhoam_catalog_source()],
            expected_error: None,
            verify_catalog_source: true,
        },
        Case {
            name: "no subscription",
            objects: vec![rhoam_catalog_source()],
            expected_error: Some(EXPECTED_ERROR),
            verify_catalog_source: false,
        },
        Case {
            name: "no catalog source at the derived namespace",
            objects: vec![rhoam_subscription()],
            expected_error: Some(EXPECTED_ERROR),
            verify_catalog_source: false,
        },
    ];

    for case in cases {
        let mut reconciler = reconciler_with(case.objects);
        let result = reconciler.reconcile(PRODUCT).await;

        match (&result, case.expected_error) {
            (Err(err), Some(expected)) => {
                assert_eq!(err.to_string(), expected, "case '{}'", case.name);
            }
            (Err(err), None) => panic!("case '{}': unexpected error: {err}", case.name),
            (Ok(_), Some(expected)) => {
                panic!("case '{}': expected error '{expected}', but got none", case.name)
            }
            (Ok(outcome), None) => assert!(outcome.is_done(), "case '{}'", case.name),
        }

        if case.verify_catalog_source {
            assert_eq!(
                reconciler.catalog_source(),
                Some(&NamespacedName::new(
                    "redhat-rhoam-3scale-operator",
                    "redhat-rhoam-cs"
                )),
                "case '{}'",
                case.name
            );
        } else {
            assert!(
                reconciler.catalog_source().is_none(),
                "case '{}': identity must stay unset on failure",
                case.name
            );
        }
    }
}

#[tokio::test]
async fn test_reconcile_is_idempotent() {
    let mut reconciler = reconciler_with(vec![rhoam_subscription(), rhoam_catalog_source()]);

    reconciler.reconcile(PRODUCT).await.expect("first reconcile failed");
    let first = reconciler.catalog_source().cloned();

    reconciler.reconcile(PRODUCT).await.expect("second reconcile failed");
    let second = reconciler.catalog_source().cloned();

    assert_eq!(first, second);
    assert_eq!(
        second,
        Some(NamespacedName::new(
            "redhat-rhoam-3scale-operator",
            "redhat-rhoam-cs"
        ))
    );
}

/// A store whose calls always fail at the transport level.
struct UnreachableStore;

#[async_trait]
impl ResourceStore for UnreachableStore {
    async fn get(
        &self,
        _kind: &ResourceKind,
        _name: &NamespacedName,
    ) -> Result<Option<StoredObject>, StoreError> {
        Err(StoreError::connection("store unreachable"))
    }

    async fn list(
        &self,
        _kind: &ResourceKind,
        _namespace: &str,
        _selector: &ListSelector,
    ) -> Result<ObjectList, StoreError> {
        Err(StoreError::connection("store unreachable"))
    }

    fn backend_name(&self) -> &'static str {
        "unreachable"
    }
}

#[tokio::test]
async fn test_infrastructure_errors_are_not_rewritten() {
    let mut reconciler = ImplicitCatalogSourceReconciler::new(
        Arc::new(UnreachableStore),
        NamespaceContext::new(INSTALL_NAMESPACE),
    );

    let err = reconciler.reconcile(PRODUCT).await.unwrap_err();

    assert!(!err.is_prerequisite_missing());
    assert_eq!(err.to_string(), "Connection error: store unreachable");
    assert!(reconciler.catalog_source().is_none());
}
