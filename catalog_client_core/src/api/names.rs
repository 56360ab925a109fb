//! Resource name validation
//!
//! The provider owns the naming scheme; only the local shape is checked so a
//! malformed name fails before a remote round trip.

use crate::error::{Result, ValidationError};

const CATALOG_PREFIX: &str = "productSearch/catalogs/";

/// Validate a catalog resource name (`productSearch/catalogs/{id}`)
pub fn validate_catalog_name(name: &str) -> Result<()> {
    let id = name.strip_prefix(CATALOG_PREFIX).unwrap_or("");
    if id.is_empty() || id.contains('/') {
        return Err(ValidationError::invalid_resource_name(
            name,
            "expected productSearch/catalogs/{id}",
        )
        .into());
    }
    Ok(())
}

/// Validate a reference image resource name
/// (`productSearch/catalogs/{id}/referenceImages/{id}`)
pub fn validate_reference_image_name(name: &str) -> Result<()> {
    let rest = name.strip_prefix(CATALOG_PREFIX).unwrap_or("");
    let mut parts = rest.split('/');
    let catalog_id = parts.next().unwrap_or("");
    let collection = parts.next().unwrap_or("");
    let image_id = parts.next().unwrap_or("");

    let well_formed = !catalog_id.is_empty()
        && collection == "referenceImages"
        && !image_id.is_empty()
        && parts.next().is_none();

    if !well_formed {
        return Err(ValidationError::invalid_resource_name(
            name,
            "expected productSearch/catalogs/{id}/referenceImages/{id}",
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_catalog_name() {
        assert!(validate_catalog_name("productSearch/catalogs/12345").is_ok());
    }

    #[test]
    fn test_catalog_name_missing_prefix() {
        assert!(validate_catalog_name("catalogs/12345").is_err());
        assert!(validate_catalog_name("").is_err());
    }

    #[test]
    fn test_catalog_name_with_trailing_segment() {
        assert!(validate_catalog_name("productSearch/catalogs/123/referenceImages/4").is_err());
    }

    #[test]
    fn test_valid_reference_image_name() {
        assert!(
            validate_reference_image_name("productSearch/catalogs/123/referenceImages/456")
                .is_ok()
        );
    }

    #[test]
    fn test_reference_image_name_wrong_collection() {
        assert!(validate_reference_image_name("productSearch/catalogs/123/images/456").is_err());
    }

    #[test]
    fn test_reference_image_name_missing_id() {
        assert!(
            validate_reference_image_name("productSearch/catalogs/123/referenceImages/").is_err()
        );
        assert!(validate_reference_image_name("productSearch/catalogs/123").is_err());
    }
}
