//! Transport related error types

use thiserror::Error;

/// Connection, timeout and decoding failures surfaced by the HTTP stack
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The connection to the service could not be established
    #[error("Connection failed: {message}")]
    Connect { message: String },

    /// The response body could not be decoded
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    /// Generic transport error
    #[error("Transport error: {message}")]
    Other { message: String },
}

impl TransportError {
    /// Create a connection error
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a generic transport error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Classify a reqwest error into a transport error
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::connect(err.to_string())
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::other(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_error() {
        let error = TransportError::Timeout;
        assert!(error.to_string().contains("timed out"));
    }

    #[test]
    fn test_connect_error() {
        let error = TransportError::connect("connection refused");
        assert!(error.to_string().contains("Connection failed"));
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_decode_error() {
        let error = TransportError::decode("unexpected end of input");
        assert!(error.to_string().contains("decode"));
    }

    #[test]
    fn test_other_error() {
        let error = TransportError::other("redirect loop");
        assert!(error.to_string().contains("Transport error"));
        assert!(error.to_string().contains("redirect loop"));
    }
}
