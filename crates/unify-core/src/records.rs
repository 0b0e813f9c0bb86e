//! Declarative records read by the marketplace reconcilers.
//!
//! A `Subscription` expresses intent to install and track a specific operator
//! package via a specific catalog source. A `CatalogSource` describes a
//! registry endpoint serving installable operator packages. Both are owned
//! and lifecycled by the surrounding installation system; this crate only
//! models their shape for read access.

use crate::meta::ObjectMeta;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub metadata: ObjectMeta,
    pub spec: SubscriptionSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SubscriptionSpec {
    /// Package name of the operator this subscription tracks.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub channel: Option<String>,
    /// Name of the catalog source backing this subscription.
    #[serde(rename = "catalogSource")]
    pub catalog_source: String,
    /// Namespace the subscription claims its catalog source lives in.
    /// Resolution derives its own namespace and never trusts this field.
    #[serde(rename = "catalogSourceNamespace", default)]
    pub catalog_source_namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSource {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: CatalogSourceSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogSourceSpec {
    #[serde(rename = "sourceType", skip_serializing_if = "Option::is_none", default)]
    pub source_type: Option<String>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none", default)]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub publisher: Option<String>,
}
