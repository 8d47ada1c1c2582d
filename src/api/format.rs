//! Conversions between BSON documents and the public JSON wire format.
//! ObjectIds render as hex strings, datetimes as RFC 3339 strings.

use bson::{Bson, Document};
use serde_json::Value;

use crate::error::ApiError;

/// Convert a stored document into the public wire format
pub fn document_to_api_value(document: &Document) -> Value {
    Value::Object(
        document
            .iter()
            .map(|(key, value)| (key.clone(), bson_to_api_value(value)))
            .collect(),
    )
}

pub fn documents_to_api_values(documents: &[Document]) -> Vec<Value> {
    documents.iter().map(document_to_api_value).collect()
}

fn bson_to_api_value(value: &Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(dt) => Value::String(dt.to_chrono().to_rfc3339()),
        Bson::Document(document) => document_to_api_value(document),
        Bson::Array(items) => Value::Array(items.iter().map(bson_to_api_value).collect()),
        other => other.clone().into_relaxed_extjson(),
    }
}

/// Convert a JSON request body into a BSON document. Rejects non-object bodies.
pub fn json_to_document(value: &Value) -> Result<Document, ApiError> {
    if !value.is_object() {
        return Err(ApiError::bad_request("Request body must be a JSON object"));
    }

    bson::to_document(value)
        .map_err(|e| ApiError::invalid_json(format!("Invalid document payload: {}", e)))
}
