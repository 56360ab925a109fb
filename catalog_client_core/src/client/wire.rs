//! Wire payloads and error envelope decoding for the REST client

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Request body for the bulk-import call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImportCatalogsRequest {
    pub input_config: ImportCatalogsInputConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImportCatalogsInputConfig {
    pub gcs_source: ImportCatalogsGcsSource,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImportCatalogsGcsSource {
    pub csv_file_uri: String,
}

/// Request body for reference image creation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewReferenceImage {
    pub image_uri: String,
    pub product_id: String,
}

/// Provider error envelope: `{"error": {"code", "message", "status"}}`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// Map a non-success response onto the service error taxonomy
///
/// `resource` is the locally-known resource name of the request, used when
/// the envelope carries no better context (not-found responses in
/// particular).
pub(crate) fn decode_error(code: u16, body: &str, resource: &str) -> ApiError {
    let parsed: Option<ErrorEnvelope> = serde_json::from_str(body).ok();
    let (status, message) = match &parsed {
        Some(envelope) => (
            envelope.error.status.clone(),
            envelope.error.message.clone(),
        ),
        // Non-JSON bodies happen on proxies and load balancers; keep a
        // bounded excerpt for display.
        None => (String::new(), body.trim().chars().take(200).collect()),
    };

    match (code, status.as_str()) {
        (404, _) | (_, "NOT_FOUND") => ApiError::not_found(resource),
        (403, _) | (_, "PERMISSION_DENIED") => ApiError::permission_denied(&message),
        (429, _) | (_, "RESOURCE_EXHAUSTED") => ApiError::quota_exceeded(&message),
        (503, _) | (_, "UNAVAILABLE") => ApiError::unavailable(&message),
        _ => ApiError::server(code, &status, &message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(code: u16, status: &str, message: &str) -> String {
        format!(
            r#"{{"error": {{"code": {code}, "message": "{message}", "status": "{status}"}}}}"#
        )
    }

    #[test]
    fn test_not_found_maps_to_resource_name() {
        let body = envelope(404, "NOT_FOUND", "Catalog does not exist.");
        let error = decode_error(404, &body, "productSearch/catalogs/123");
        assert!(matches!(error, ApiError::NotFound { ref name } if name == "productSearch/catalogs/123"));
    }

    #[test]
    fn test_permission_denied_mapping() {
        let body = envelope(403, "PERMISSION_DENIED", "Caller lacks vision scope.");
        let error = decode_error(403, &body, "productSearch/catalogs/123");
        assert!(matches!(error, ApiError::PermissionDenied { .. }));
        assert!(error.to_string().contains("vision scope"));
    }

    #[test]
    fn test_quota_exceeded_mapping() {
        let body = envelope(429, "RESOURCE_EXHAUSTED", "Quota exceeded for requests.");
        let error = decode_error(429, &body, "productSearch/catalogs/123");
        assert!(matches!(error, ApiError::QuotaExceeded { .. }));
    }

    #[test]
    fn test_unavailable_mapping() {
        let body = envelope(503, "UNAVAILABLE", "The service is currently unavailable.");
        let error = decode_error(503, &body, "productSearch/catalogs/123");
        assert!(matches!(error, ApiError::Unavailable { .. }));
        assert!(error.is_transient());
    }

    #[test]
    fn test_status_string_wins_over_unexpected_code() {
        // Some proxies rewrite HTTP codes; the canonical status still maps.
        let body = envelope(400, "NOT_FOUND", "No such reference image.");
        let error = decode_error(400, &body, "productSearch/catalogs/1/referenceImages/2");
        assert!(matches!(error, ApiError::NotFound { .. }));
    }

    #[test]
    fn test_unknown_error_keeps_code_status_message() {
        let body = envelope(400, "INVALID_ARGUMENT", "Bad CSV URI.");
        let error = decode_error(400, &body, "productSearch/catalogs/123");
        match error {
            ApiError::Server {
                code,
                ref status,
                ref message,
            } => {
                assert_eq!(code, 400);
                assert_eq!(status, "INVALID_ARGUMENT");
                assert_eq!(message, "Bad CSV URI.");
            }
            other => panic!("Expected Server error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_is_excerpted() {
        let error = decode_error(502, "<html>Bad Gateway</html>", "productSearch/catalogs/1");
        match error {
            ApiError::Server { code, ref message, .. } => {
                assert_eq!(code, 502);
                assert!(message.contains("Bad Gateway"));
            }
            other => panic!("Expected Server error, got {other:?}"),
        }
    }

    #[test]
    fn test_import_request_wire_shape() {
        let request = ImportCatalogsRequest {
            input_config: ImportCatalogsInputConfig {
                gcs_source: ImportCatalogsGcsSource {
                    csv_file_uri: "gs://bucket/manifest.csv".to_string(),
                },
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["inputConfig"]["gcsSource"]["csvFileUri"],
            "gs://bucket/manifest.csv"
        );
    }

    #[test]
    fn test_new_reference_image_wire_shape() {
        let request = NewReferenceImage {
            image_uri: "gs://bucket/shoe.jpg".to_string(),
            product_id: "shoe-001".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["imageUri"], "gs://bucket/shoe.jpg");
        assert_eq!(json["productId"], "shoe-001");
    }
}
