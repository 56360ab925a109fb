//! Remote service error types

use thiserror::Error;

/// Errors reported by the remote product search service
///
/// These are propagated to the caller unmodified; the client performs no
/// local retry or recovery.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The addressed resource does not exist
    #[error("Resource not found: {name}")]
    NotFound { name: String },

    /// The caller lacks permission for the operation
    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    /// The caller's quota is exhausted
    #[error("Quota exceeded: {message}")]
    QuotaExceeded { message: String },

    /// The service is temporarily unavailable
    #[error("Service unavailable: {message}")]
    Unavailable { message: String },

    /// Any other service error with its HTTP code and canonical status
    #[error("Product search API error: {code} {status} - {message}")]
    Server {
        code: u16,
        status: String,
        message: String,
    },
}

impl ApiError {
    /// Create a not found error for a resource name
    pub fn not_found(name: &str) -> Self {
        Self::NotFound {
            name: name.to_string(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(message: &str) -> Self {
        Self::PermissionDenied {
            message: message.to_string(),
        }
    }

    /// Create a quota exceeded error
    pub fn quota_exceeded(message: &str) -> Self {
        Self::QuotaExceeded {
            message: message.to_string(),
        }
    }

    /// Create a service unavailable error
    pub fn unavailable(message: &str) -> Self {
        Self::Unavailable {
            message: message.to_string(),
        }
    }

    /// Create a generic server error with code and status
    pub fn server(code: u16, status: &str, message: &str) -> Self {
        Self::Server {
            code,
            status: status.to_string(),
            message: message.to_string(),
        }
    }

    /// Check if this error is transient and could succeed on a later attempt
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Unavailable { .. } => true,
            Self::QuotaExceeded { .. } => true,
            Self::Server { code, .. } => matches!(code, 500..=504),
            _ => false,
        }
    }

    /// Check if this error indicates a permanent failure
    pub fn is_permanent(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::PermissionDenied { .. } => true,
            Self::Server { code, .. } => matches!(code, 400..=499),
            _ => false,
        }
    }
}
