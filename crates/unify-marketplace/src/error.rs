use thiserror::Error;

use unify_storage::StoreError;

/// Errors surfaced by marketplace reconciliation.
///
/// The two "prerequisite missing" kinds render the same fixed message on
/// purpose: from the caller's perspective, implicit catalog-source
/// resolution simply did not succeed. The enum variant still records which
/// prerequisite was absent. Store-level faults pass through unchanged and
/// are never folded into that taxonomy.
#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// No subscription matches the product/namespace ownership selector.
    #[error("catalog source not found for implicit product installation type")]
    SubscriptionNotFound,

    /// A subscription exists but its referenced catalog source does not.
    #[error("catalog source not found for implicit product installation type")]
    CatalogSourceNotFound,

    /// Store-level failure, propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MarketplaceError {
    /// Returns `true` if the failure means a prerequisite object is missing,
    /// as opposed to the store being unreachable or broken.
    #[must_use]
    pub fn is_prerequisite_missing(&self) -> bool {
        matches!(self, Self::SubscriptionNotFound | Self::CatalogSourceNotFound)
    }
}
