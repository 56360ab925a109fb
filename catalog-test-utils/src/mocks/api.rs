//! Mock implementation of the product search API for testing

use async_trait::async_trait;
use catalog_client_core::api::{
    Catalog, CatalogSpec, Category, Operation, ProductSearchApi, ReferenceImage,
    ReferenceImagePage,
};
use catalog_client_core::error::{ApiError, Error, Result, ValidationError};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Failure to inject into the next call
#[derive(Debug, Clone)]
pub enum MockFailure {
    NotFound(String),
    PermissionDenied,
    QuotaExceeded,
    Unavailable,
}

impl From<MockFailure> for Error {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::NotFound(name) => Error::Api(ApiError::not_found(&name)),
            MockFailure::PermissionDenied => {
                Error::Api(ApiError::permission_denied("caller lacks permission"))
            }
            MockFailure::QuotaExceeded => {
                Error::Api(ApiError::quota_exceeded("request quota exhausted"))
            }
            MockFailure::Unavailable => {
                Error::Api(ApiError::unavailable("service temporarily unavailable"))
            }
        }
    }
}

#[derive(Debug)]
struct MockState {
    next_id: u64,
    // catalog name -> (reference image name -> record)
    catalogs: BTreeMap<String, BTreeMap<String, ReferenceImage>>,
    page_size: usize,
    assigned_category: Category,
    fail_next: Option<MockFailure>,
}

/// In-memory mock of the remote product search service
///
/// Holds catalog and reference image state locally so round-trip, cleanup
/// and pagination behavior can be tested without network connectivity.
/// Failures are injected per call with [`MockProductSearchApi::fail_next`].
///
/// # Examples
///
/// ```rust,no_run
/// use catalog_test_utils::MockProductSearchApi;
/// use catalog_client_core::api::{CatalogSpec, ProductSearchApi};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mock = MockProductSearchApi::new();
/// let catalog = mock.create_catalog(CatalogSpec::default()).await?;
/// assert!(catalog.name.starts_with("productSearch/catalogs/"));
/// # Ok(())
/// # }
/// ```
pub struct MockProductSearchApi {
    state: Arc<Mutex<MockState>>,
}

impl Default for MockProductSearchApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProductSearchApi {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                next_id: 1,
                catalogs: BTreeMap::new(),
                page_size: 10,
                assigned_category: Category::Unspecified,
                fail_next: None,
            })),
        }
    }

    /// Set the listing page size, to exercise pagination with small data sets
    pub fn with_page_size(self, page_size: usize) -> Self {
        self.state.lock().expect("mock state poisoned").page_size = page_size.max(1);
        self
    }

    /// Set the category the service assigns to created reference images
    pub fn with_assigned_category(self, category: Category) -> Self {
        self.state
            .lock()
            .expect("mock state poisoned")
            .assigned_category = category;
        self
    }

    /// Inject a failure into the next call, whatever it is
    pub fn fail_next(&self, failure: MockFailure) {
        self.state.lock().expect("mock state poisoned").fail_next = Some(failure);
    }

    /// Whether a catalog with this name currently exists
    pub fn contains_catalog(&self, catalog_name: &str) -> bool {
        self.state
            .lock()
            .expect("mock state poisoned")
            .catalogs
            .contains_key(catalog_name)
    }

    /// Number of reference images currently stored under a catalog
    pub fn image_count(&self, catalog_name: &str) -> usize {
        self.state
            .lock()
            .expect("mock state poisoned")
            .catalogs
            .get(catalog_name)
            .map(BTreeMap::len)
            .unwrap_or(0)
    }

    fn take_failure(state: &mut MockState) -> Result<()> {
        match state.fail_next.take() {
            Some(failure) => Err(failure.into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProductSearchApi for MockProductSearchApi {
    async fn create_catalog(&self, _spec: CatalogSpec) -> Result<Catalog> {
        let mut state = self.state.lock().expect("mock state poisoned");
        Self::take_failure(&mut state)?;

        let name = format!("productSearch/catalogs/{}", state.next_id);
        state.next_id += 1;
        state.catalogs.insert(name.clone(), BTreeMap::new());
        Ok(Catalog { name })
    }

    async fn delete_catalog(&self, catalog_name: &str) -> Result<()> {
        let mut state = self.state.lock().expect("mock state poisoned");
        Self::take_failure(&mut state)?;

        match state.catalogs.remove(catalog_name) {
            Some(_) => Ok(()),
            None => Err(Error::Api(ApiError::not_found(catalog_name))),
        }
    }

    async fn import_catalogs(&self, csv_file_uri: &str) -> Result<Operation> {
        let mut state = self.state.lock().expect("mock state poisoned");
        Self::take_failure(&mut state)?;

        if csv_file_uri.is_empty() {
            return Err(
                ValidationError::invalid_parameter("csv_file_uri", "must not be empty").into(),
            );
        }

        let name = format!("operations/import-{}", state.next_id);
        state.next_id += 1;
        Ok(Operation { name, done: false })
    }

    async fn create_reference_image(
        &self,
        catalog_name: &str,
        image_uri: &str,
        product_id: &str,
    ) -> Result<ReferenceImage> {
        let mut state = self.state.lock().expect("mock state poisoned");
        Self::take_failure(&mut state)?;

        let id = state.next_id;
        state.next_id += 1;
        let category = state.assigned_category;

        let images = state
            .catalogs
            .get_mut(catalog_name)
            .ok_or_else(|| Error::Api(ApiError::not_found(catalog_name)))?;

        let image = ReferenceImage {
            name: format!("{catalog_name}/referenceImages/{id}"),
            image_uri: image_uri.to_string(),
            product_id: product_id.to_string(),
            category,
        };
        images.insert(image.name.clone(), image.clone());
        Ok(image)
    }

    async fn list_reference_images(
        &self,
        catalog_name: &str,
        product_id: Option<&str>,
        page_token: Option<&str>,
    ) -> Result<ReferenceImagePage> {
        let mut state = self.state.lock().expect("mock state poisoned");
        Self::take_failure(&mut state)?;

        let page_size = state.page_size;
        let images = state
            .catalogs
            .get(catalog_name)
            .ok_or_else(|| Error::Api(ApiError::not_found(catalog_name)))?;

        let matching: Vec<ReferenceImage> = images
            .values()
            .filter(|image| product_id.is_none_or(|id| image.product_id == id))
            .cloned()
            .collect();

        let start: usize = match page_token {
            Some(token) => token.parse().map_err(|_| {
                Error::Api(ApiError::server(400, "INVALID_ARGUMENT", "bad page token"))
            })?,
            None => 0,
        };
        let end = (start + page_size).min(matching.len());

        Ok(ReferenceImagePage {
            reference_images: matching[start.min(end)..end].to_vec(),
            next_page_token: (end < matching.len()).then(|| end.to_string()),
        })
    }

    async fn get_reference_image(&self, reference_image_name: &str) -> Result<ReferenceImage> {
        let mut state = self.state.lock().expect("mock state poisoned");
        Self::take_failure(&mut state)?;

        state
            .catalogs
            .values()
            .find_map(|images| images.get(reference_image_name))
            .cloned()
            .ok_or_else(|| Error::Api(ApiError::not_found(reference_image_name)))
    }

    async fn delete_reference_image(&self, reference_image_name: &str) -> Result<()> {
        let mut state = self.state.lock().expect("mock state poisoned");
        Self::take_failure(&mut state)?;

        for images in state.catalogs.values_mut() {
            if images.remove(reference_image_name).is_some() {
                return Ok(());
            }
        }
        Err(Error::Api(ApiError::not_found(reference_image_name)))
    }

    async fn delete_reference_images(&self, catalog_name: &str, product_id: &str) -> Result<()> {
        let mut state = self.state.lock().expect("mock state poisoned");
        Self::take_failure(&mut state)?;

        let images = state
            .catalogs
            .get_mut(catalog_name)
            .ok_or_else(|| Error::Api(ApiError::not_found(catalog_name)))?;

        images.retain(|_, image| image.product_id != product_id);
        Ok(())
    }
}
