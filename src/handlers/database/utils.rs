use bson::{oid::ObjectId, Document};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::schemas::{self, ValidationOutcome};

/// Parse an optional JSON filter string into a BSON document.
/// Missing filter means match-all.
pub fn parse_filter(raw: Option<&str>) -> Result<Document, ApiError> {
    let Some(raw) = raw else {
        return Ok(Document::new());
    };

    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ApiError::invalid_json(format!("Invalid filter JSON: {}", e)))?;
    if !value.is_object() {
        return Err(ApiError::invalid_json("Filter must be a JSON object"));
    }

    bson::to_document(&value)
        .map_err(|e| ApiError::invalid_json(format!("Invalid filter JSON: {}", e)))
}

/// Resolve the page size for a collection read. Non-positive limits are
/// rejected rather than clamped: the driver treats limit 0 as "no limit",
/// which would bypass the configured hard cap.
pub fn resolve_limit(requested: Option<i64>, api: &ApiConfig) -> Result<i64, ApiError> {
    match requested {
        None => Ok(api.default_page_size),
        Some(limit) if limit < 1 => {
            Err(ApiError::bad_request("limit must be a positive integer"))
        }
        Some(limit) => Ok(limit.min(api.max_page_size)),
    }
}

pub fn parse_object_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id)
        .map_err(|_| ApiError::bad_request(format!("Invalid document ID format: {}", id)))
}

/// Reject writes that fail schema validation. Collections without a
/// registered schema pass through.
pub fn ensure_valid(collection: &str, document: &Value) -> Result<(), ApiError> {
    match schemas::validate(collection, document)? {
        ValidationOutcome::Invalid(issues) => {
            let field_errors = issues
                .into_iter()
                .map(|issue| (issue.path, issue.message))
                .collect();
            Err(ApiError::validation_error(
                "Validation failed",
                Some(field_errors),
            ))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_filter_matches_all() {
        let filter = parse_filter(None).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn object_filter_parses() {
        let filter = parse_filter(Some(r#"{"status": "active"}"#)).unwrap();
        assert_eq!(filter.get_str("status").unwrap(), "active");
    }

    #[test]
    fn malformed_filter_is_rejected() {
        let err = parse_filter(Some("not-json")).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn non_object_filter_is_rejected() {
        let err = parse_filter(Some("42")).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    fn page_config() -> ApiConfig {
        ApiConfig {
            default_page_size: 100,
            max_page_size: 1000,
            enable_request_logging: false,
        }
    }

    #[test]
    fn missing_limit_uses_default() {
        assert_eq!(resolve_limit(None, &page_config()).unwrap(), 100);
    }

    #[test]
    fn oversized_limit_is_capped() {
        assert_eq!(resolve_limit(Some(5000), &page_config()).unwrap(), 1000);
        assert_eq!(resolve_limit(Some(10), &page_config()).unwrap(), 10);
    }

    #[test]
    fn non_positive_limits_are_rejected() {
        // limit 0 means "no limit" to the driver; both must be 400s
        assert_eq!(resolve_limit(Some(0), &page_config()).unwrap_err().status_code(), 400);
        assert_eq!(resolve_limit(Some(-1), &page_config()).unwrap_err().status_code(), 400);
    }

    #[test]
    fn object_id_parsing() {
        assert!(parse_object_id("507f1f77bcf86cd799439011").is_ok());

        let err = parse_object_id("not-an-id").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn unregistered_collection_passes_validation() {
        let document = serde_json::json!({ "free": "form" });
        assert!(ensure_valid("anything_goes", &document).is_ok());
    }
}
