use unify_core::CoreError;

/// Environment variable naming the operator's own operating namespace.
pub const WATCH_NAMESPACE_VAR: &str = "WATCH_NAMESPACE";

/// The operator's own operating namespace, as an explicit value.
///
/// Reconcilers receive this at construction and read it on every call; none
/// of them touches process environment. The only place the environment is
/// consulted is [`NamespaceContext::from_env`], meant for the process edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceContext {
    namespace: String,
}

impl NamespaceContext {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Reads the namespace from `WATCH_NAMESPACE`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if the variable is unset or empty.
    pub fn from_env() -> Result<Self, CoreError> {
        match std::env::var(WATCH_NAMESPACE_VAR) {
            Ok(namespace) if !namespace.trim().is_empty() => Ok(Self::new(namespace)),
            _ => Err(CoreError::configuration(format!(
                "{WATCH_NAMESPACE_VAR} is not set"
            ))),
        }
    }

    /// The namespace the operator itself runs in.
    pub fn own_namespace(&self) -> &str {
        &self.namespace
    }
}
