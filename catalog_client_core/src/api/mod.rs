//! Remote API surface
//!
//! `ProductSearchApi` is the seam between callers and the remote service:
//! the REST client implements it for production and the test-utils crate
//! provides an in-memory mock. One method per remote procedure, each a single
//! request/response exchange (bulk import returns an operation handle rather
//! than a terminal result).

pub mod names;
pub mod types;

pub use names::{validate_catalog_name, validate_reference_image_name};
pub use types::{Catalog, CatalogSpec, Category, Operation, ReferenceImage, ReferenceImagePage};

use crate::error::Result;
use async_trait::async_trait;
use std::collections::VecDeque;

/// Remote product search operations
#[async_trait]
pub trait ProductSearchApi: Send + Sync {
    /// Create a catalog from an explicit creation spec
    async fn create_catalog(&self, spec: CatalogSpec) -> Result<Catalog>;

    /// Delete a catalog by resource name
    async fn delete_catalog(&self, catalog_name: &str) -> Result<()>;

    /// Start a bulk import of reference images from a CSV manifest in remote
    /// storage; returns the handle to the asynchronous job
    async fn import_catalogs(&self, csv_file_uri: &str) -> Result<Operation>;

    /// Create one reference image under a catalog
    async fn create_reference_image(
        &self,
        catalog_name: &str,
        image_uri: &str,
        product_id: &str,
    ) -> Result<ReferenceImage>;

    /// Fetch one page of reference images under a catalog, optionally
    /// filtered by product
    async fn list_reference_images(
        &self,
        catalog_name: &str,
        product_id: Option<&str>,
        page_token: Option<&str>,
    ) -> Result<ReferenceImagePage>;

    /// Fetch one reference image by resource name
    async fn get_reference_image(&self, reference_image_name: &str) -> Result<ReferenceImage>;

    /// Delete one reference image by resource name
    async fn delete_reference_image(&self, reference_image_name: &str) -> Result<()>;

    /// Delete every reference image for a product within a catalog
    async fn delete_reference_images(&self, catalog_name: &str, product_id: &str) -> Result<()>;
}

enum PageState {
    Start,
    Next(String),
    Done,
}

/// Lazy sequence over a reference image listing
///
/// Pages are fetched on demand as records are consumed. The sequence is
/// finite and not restartable; a fresh listing re-issues the remote calls.
pub struct ReferenceImageList<'a> {
    api: &'a dyn ProductSearchApi,
    catalog_name: String,
    product_id: Option<String>,
    buffered: VecDeque<ReferenceImage>,
    state: PageState,
}

impl<'a> ReferenceImageList<'a> {
    /// Start a listing over `catalog_name`, filtered to `product_id` when
    /// given and spanning every product otherwise
    pub fn new(
        api: &'a dyn ProductSearchApi,
        catalog_name: &str,
        product_id: Option<&str>,
    ) -> Self {
        Self {
            api,
            catalog_name: catalog_name.to_string(),
            product_id: product_id.map(str::to_string),
            buffered: VecDeque::new(),
            state: PageState::Start,
        }
    }

    /// Pull the next reference image, fetching the next page when the buffer
    /// runs dry; `None` once the listing is exhausted
    pub async fn next(&mut self) -> Result<Option<ReferenceImage>> {
        loop {
            if let Some(image) = self.buffered.pop_front() {
                return Ok(Some(image));
            }

            let token = match &self.state {
                PageState::Done => return Ok(None),
                PageState::Start => None,
                PageState::Next(token) => Some(token.clone()),
            };

            let page = self
                .api
                .list_reference_images(
                    &self.catalog_name,
                    self.product_id.as_deref(),
                    token.as_deref(),
                )
                .await?;

            self.state = match page.next_page_token {
                Some(token) if !token.is_empty() => PageState::Next(token),
                _ => PageState::Done,
            };
            self.buffered.extend(page.reference_images);
        }
    }

    /// Drain the remaining records into a vector
    pub async fn collect_all(mut self) -> Result<Vec<ReferenceImage>> {
        let mut images = Vec::new();
        while let Some(image) = self.next().await? {
            images.push(image);
        }
        Ok(images)
    }
}
