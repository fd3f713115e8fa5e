//! Contract error types for app settings
//!
//! These errors are transport-agnostic. They are also the block store's error
//! taxonomy, so store failures reach callers without translation.

/// App settings errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppSettingsError {
    /// Application or block not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (app, block)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Actor is not allowed to access the application
    #[error("Permission denied: {reason}")]
    PermissionDenied {
        /// Denial reason
        reason: String,
    },
    /// Payload rejected by the store's write path
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// Storage backend failure
    #[error("Internal error: {message}")]
    Internal {
        /// Backend error description
        message: String,
    },
}

impl AppSettingsError {
    pub fn not_found(resource: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.into(),
        }
    }

    pub fn internal(error: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: error.to_string(),
        }
    }
}
