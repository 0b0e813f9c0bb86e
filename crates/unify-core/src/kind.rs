use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declarative resource kinds the operator works with
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Subscription,
    CatalogSource,
    Installation,
    #[serde(untagged)]
    Custom(String),
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Subscription => write!(f, "Subscription"),
            ResourceKind::CatalogSource => write!(f, "CatalogSource"),
            ResourceKind::Installation => write!(f, "Installation"),
            ResourceKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Subscription" => Ok(ResourceKind::Subscription),
            "CatalogSource" => Ok(ResourceKind::CatalogSource),
            "Installation" => Ok(ResourceKind::Installation),
            name => {
                if is_valid_kind_name(name) {
                    Ok(ResourceKind::Custom(name.to_string()))
                } else {
                    Err(CoreError::invalid_kind(name.to_string()))
                }
            }
        }
    }
}

/// Validate if a string is a valid declarative kind name
pub fn is_valid_kind_name(name: &str) -> bool {
    // Kind names must start with an uppercase letter and contain only letters
    !name.is_empty()
        && name.chars().next().map(|c| c.is_ascii_uppercase()).unwrap_or(false)
        && name.chars().all(|c| c.is_ascii_alphabetic())
}
