//! Store error types for the resource store abstraction layer.
//!
//! This module defines all error types that can occur during store
//! operations.

use std::fmt;

use unify_core::ResourceKind;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested object was not found.
    #[error("Object not found: {kind}/{name}")]
    NotFound {
        /// The kind of object that was not found.
        kind: String,
        /// The namespaced name of the object that was not found.
        name: String,
    },

    /// Attempted to create an object that already exists.
    #[error("Object already exists: {kind}/{name}")]
    AlreadyExists {
        /// The kind of object that already exists.
        kind: String,
        /// The namespaced name of the object that already exists.
        name: String,
    },

    /// The object data is invalid.
    #[error("Invalid object: {message}")]
    InvalidObject {
        /// Description of why the object is invalid.
        message: String,
    },

    /// Failed to reach the store backend.
    #[error("Connection error: {message}")]
    Connection {
        /// Description of the connection error.
        message: String,
    },

    /// The operation was canceled before the store answered.
    #[error("Operation canceled")]
    Canceled,

    /// An internal store error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl StoreError {
    /// Creates a new `NotFound` error.
    #[must_use]
    pub fn not_found(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.to_string(),
            name: name.into(),
        }
    }

    /// Creates a new `AlreadyExists` error.
    #[must_use]
    pub fn already_exists(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            kind: kind.to_string(),
            name: name.into(),
        }
    }

    /// Creates a new `InvalidObject` error.
    #[must_use]
    pub fn invalid_object(message: impl Into<String>) -> Self {
        Self::InvalidObject {
            message: message.into(),
        }
    }

    /// Creates a new `Connection` error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is an already exists error.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Returns `true` if this is an invalid object error.
    #[must_use]
    pub fn is_invalid_object(&self) -> bool {
        matches!(self, Self::InvalidObject { .. })
    }

    /// Returns `true` if the operation was canceled.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::InvalidObject { .. } => ErrorCategory::Validation,
            Self::Connection { .. } => ErrorCategory::Infrastructure,
            Self::Canceled => ErrorCategory::Canceled,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Categories of store errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Object not found.
    NotFound,
    /// Conflict on existence.
    Conflict,
    /// Validation error.
    Validation,
    /// Infrastructure/connection error.
    Infrastructure,
    /// Canceled before completion.
    Canceled,
    /// Internal error.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::Validation => write!(f, "validation"),
            Self::Infrastructure => write!(f, "infrastructure"),
            Self::Canceled => write!(f, "canceled"),
            Self::Internal => write!(f, "internal"),
        }
    }
}
