//! Test data builders for creating test scenarios

use catalog_client_core::api::{Category, ReferenceImage};

/// Builder for reference image fixtures and import manifest lines
pub struct TestDataBuilder {
    name: Option<String>,
    image_uri: Option<String>,
    product_id: Option<String>,
    category: Category,
}

impl Default for TestDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDataBuilder {
    /// Create a new test data builder
    pub fn new() -> Self {
        Self {
            name: None,
            image_uri: None,
            product_id: None,
            category: Category::Unspecified,
        }
    }

    /// Set the resource name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Set the image URI
    pub fn with_image_uri(mut self, uri: &str) -> Self {
        self.image_uri = Some(uri.to_string());
        self
    }

    /// Set the product ID
    pub fn with_product_id(mut self, product_id: &str) -> Self {
        self.product_id = Some(product_id.to_string());
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Build a reference image record
    pub fn build(self) -> ReferenceImage {
        ReferenceImage {
            name: self
                .name
                .unwrap_or_else(|| "productSearch/catalogs/1/referenceImages/1".to_string()),
            image_uri: self
                .image_uri
                .unwrap_or_else(|| "gs://test-bucket/image.jpg".to_string()),
            product_id: self.product_id.unwrap_or_else(|| "product-1".to_string()),
            category: self.category,
        }
    }

    /// Build one line of a bulk-import CSV manifest
    pub fn build_manifest_line(self) -> String {
        let image = self.build();
        format!(
            "{},{},{}",
            image.image_uri,
            image.product_id,
            image.category.label()
        )
    }
}
