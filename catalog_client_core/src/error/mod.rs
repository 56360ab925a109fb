//! Error types for the product search client core library
//!
//! This module contains all error types used throughout the library, organized
//! into logical categories for better maintainability and clarity.

use thiserror::Error;

pub mod api;
pub mod transport;
pub mod validation;

pub use self::api::ApiError;
pub use self::transport::TransportError;
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the product search client core library
///
/// Errors are categorized into three main types:
/// - API errors: errors reported by the remote product search service
/// - Transport errors: connection, timeout and decoding failures
/// - Validation errors: input validation and configuration errors
#[derive(Error, Debug)]
pub enum Error {
    /// Remote service errors
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Transport related errors
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// Conversions from external error types

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport(TransportError::from_reqwest(&source))
    }
}
