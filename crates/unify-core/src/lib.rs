pub mod error;
pub mod kind;
pub mod meta;
pub mod records;

pub use error::{CoreError, Result};
pub use kind::{ResourceKind, is_valid_kind_name};
pub use meta::{NamespacedName, ObjectMeta};
pub use records::{CatalogSource, CatalogSourceSpec, Subscription, SubscriptionSpec};
