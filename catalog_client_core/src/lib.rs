//! Product Search Client Core Library
//!
//! This is the core library for the product search catalog client, providing
//! typed request/response messages, the remote API seam, and the REST client
//! used to manage catalogs and reference images.

pub mod api;
pub mod client;
pub mod error;

// Re-export main types
pub use api::{
    Catalog, CatalogSpec, Category, Operation, ProductSearchApi, ReferenceImage,
    ReferenceImageList, ReferenceImagePage,
};
pub use client::ProductSearchClient;
pub use error::{Error, Result};

/// Default service endpoint for the product search API.
pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1alpha1";

/// Core client configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
    pub access_token: Option<String>,
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_token: None,
            timeout_seconds: 30,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a test configuration
    pub fn test() -> Self {
        Self {
            endpoint: "http://localhost:9090/v1alpha1".to_string(),
            access_token: Some("test-token".to_string()),
            timeout_seconds: 5,
            user_agent: Some("catalog-test".to_string()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::Validation(
                error::ValidationError::invalid_configuration("Endpoint must not be empty"),
            ));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(Error::Validation(
                error::ValidationError::invalid_configuration(
                    "Endpoint must be an http(s) URL",
                ),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(Error::Validation(
                error::ValidationError::invalid_configuration(
                    "Request timeout must be at least one second",
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let config = ClientConfig {
            endpoint: String::new(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let config = ClientConfig {
            endpoint: "ftp://example.com".to_string(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ClientConfig {
            timeout_seconds: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
