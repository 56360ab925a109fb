//! REST client for the product search service
//!
//! One reusable HTTP client per `ProductSearchClient`; transport concerns
//! (TLS, timeouts, connection pooling) live in the underlying stack and are
//! configured, not implemented, here. Service failures are decoded into the
//! `ApiError` taxonomy and propagated unmodified; nothing is retried locally.

mod wire;

use crate::api::{
    Catalog, CatalogSpec, Operation, ProductSearchApi, ReferenceImage, ReferenceImagePage,
    validate_catalog_name, validate_reference_image_name,
};
use crate::error::{Error, Result, ValidationError};
use crate::ClientConfig;
use async_trait::async_trait;
use log::{debug, trace};
use reqwest::Method;
use std::time::Duration;

/// Client for the remote product search API
pub struct ProductSearchClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ProductSearchClient {
    /// Create a client from configuration
    ///
    /// The HTTP client is built once and reused for every call issued
    /// through this handle.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_seconds));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let http = builder.build()?;

        Ok(Self { http, config })
    }

    /// The configured service endpoint
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.endpoint.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.url(path);
        trace!("{method} {url}");
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.config.access_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Issue the request and surface non-success responses as API errors
    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        resource: &str,
    ) -> Result<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("Service error {status} for {resource}");
        Err(Error::Api(wire::decode_error(
            status.as_u16(),
            &body,
            resource,
        )))
    }
}

#[async_trait]
impl ProductSearchApi for ProductSearchClient {
    async fn create_catalog(&self, spec: CatalogSpec) -> Result<Catalog> {
        debug!("Creating catalog");
        let response = self
            .send(
                self.request(Method::POST, "productSearch/catalogs").json(&spec),
                "productSearch/catalogs",
            )
            .await?;
        let catalog: Catalog = response.json().await?;
        debug!("Created catalog {}", catalog.name);
        Ok(catalog)
    }

    async fn delete_catalog(&self, catalog_name: &str) -> Result<()> {
        validate_catalog_name(catalog_name)?;
        debug!("Deleting catalog {catalog_name}");
        self.send(self.request(Method::DELETE, catalog_name), catalog_name)
            .await?;
        Ok(())
    }

    async fn import_catalogs(&self, csv_file_uri: &str) -> Result<Operation> {
        if csv_file_uri.is_empty() {
            return Err(
                ValidationError::invalid_parameter("csv_file_uri", "must not be empty").into(),
            );
        }

        debug!("Importing catalogs from {csv_file_uri}");
        let request = wire::ImportCatalogsRequest {
            input_config: wire::ImportCatalogsInputConfig {
                gcs_source: wire::ImportCatalogsGcsSource {
                    csv_file_uri: csv_file_uri.to_string(),
                },
            },
        };

        let response = self
            .send(
                self.request(Method::POST, "productSearch/catalogs:import")
                    .json(&request),
                "productSearch/catalogs:import",
            )
            .await?;
        let operation: Operation = response.json().await?;
        debug!("Import started as operation {}", operation.name);
        Ok(operation)
    }

    async fn create_reference_image(
        &self,
        catalog_name: &str,
        image_uri: &str,
        product_id: &str,
    ) -> Result<ReferenceImage> {
        validate_catalog_name(catalog_name)?;
        if image_uri.is_empty() {
            return Err(
                ValidationError::invalid_parameter("image_uri", "must not be empty").into(),
            );
        }
        if product_id.is_empty() {
            return Err(
                ValidationError::invalid_parameter("product_id", "must not be empty").into(),
            );
        }

        debug!("Creating reference image under {catalog_name} for product {product_id}");
        let path = format!("{catalog_name}/referenceImages");
        let request = wire::NewReferenceImage {
            image_uri: image_uri.to_string(),
            product_id: product_id.to_string(),
        };

        let response = self
            .send(self.request(Method::POST, &path).json(&request), &path)
            .await?;
        let image: ReferenceImage = response.json().await?;
        Ok(image)
    }

    async fn list_reference_images(
        &self,
        catalog_name: &str,
        product_id: Option<&str>,
        page_token: Option<&str>,
    ) -> Result<ReferenceImagePage> {
        validate_catalog_name(catalog_name)?;

        debug!("Listing reference images under {catalog_name}");
        let path = format!("{catalog_name}/referenceImages");
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(product_id) = product_id {
            query.push(("productId", product_id));
        }
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .send(self.request(Method::GET, &path).query(&query), &path)
            .await?;
        let page: ReferenceImagePage = response.json().await?;
        Ok(page)
    }

    async fn get_reference_image(&self, reference_image_name: &str) -> Result<ReferenceImage> {
        validate_reference_image_name(reference_image_name)?;

        debug!("Fetching reference image {reference_image_name}");
        let response = self
            .send(
                self.request(Method::GET, reference_image_name),
                reference_image_name,
            )
            .await?;
        let image: ReferenceImage = response.json().await?;
        Ok(image)
    }

    async fn delete_reference_image(&self, reference_image_name: &str) -> Result<()> {
        validate_reference_image_name(reference_image_name)?;

        debug!("Deleting reference image {reference_image_name}");
        self.send(
            self.request(Method::DELETE, reference_image_name),
            reference_image_name,
        )
        .await?;
        Ok(())
    }

    async fn delete_reference_images(&self, catalog_name: &str, product_id: &str) -> Result<()> {
        validate_catalog_name(catalog_name)?;
        if product_id.is_empty() {
            return Err(
                ValidationError::invalid_parameter("product_id", "must not be empty").into(),
            );
        }

        debug!("Deleting reference images under {catalog_name} for product {product_id}");
        let path = format!("{catalog_name}/referenceImages");
        self.send(
            self.request(Method::DELETE, &path)
                .query(&[("productId", product_id)]),
            &path,
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn client() -> ProductSearchClient {
        ProductSearchClient::new(ClientConfig::test()).unwrap()
    }

    #[test]
    fn test_url_joins_without_duplicate_slash() {
        let client = client();
        assert_eq!(
            client.url("productSearch/catalogs"),
            "http://localhost:9090/v1alpha1/productSearch/catalogs"
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ClientConfig {
            endpoint: String::new(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            ProductSearchClient::new(config),
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_catalog_rejects_malformed_name() {
        let result = client().delete_catalog("not-a-catalog").await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_import_rejects_empty_uri() {
        let result = client().import_catalogs("").await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_reference_image_rejects_empty_product_id() {
        let result = client()
            .create_reference_image("productSearch/catalogs/1", "gs://bucket/a.jpg", "")
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_purge_rejects_empty_product_id() {
        let result = client()
            .delete_reference_images("productSearch/catalogs/1", "")
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
