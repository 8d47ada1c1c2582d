use axum::extract::Path;
use axum::response::Json;
use bson::doc;
use serde_json::{json, Value};

use crate::api::format::json_to_document;
use crate::database::{documents, DatabaseManager};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::schemas::{self, ValidationOutcome};

use super::utils::{ensure_valid, parse_object_id};

/// POST /api/database/collections/:collection/validate - Dry-run validation.
/// Always 200; the outcome is reported in the body.
pub async fn document_validate(
    Path(collection): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Value> {
    let data = match schemas::validate(&collection, &payload)? {
        ValidationOutcome::NoSchema => json!({
            "valid": true,
            "message": "No schema defined for this collection, skipping validation"
        }),
        ValidationOutcome::Valid => json!({ "valid": true }),
        ValidationOutcome::Invalid(issues) => json!({ "valid": false, "errors": issues }),
    };

    Ok(ApiResponse::success(data))
}

/// POST /api/database/collections/:collection/create - Insert a document,
/// validating against the registered schema first
pub async fn document_create(
    Path(collection): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Value> {
    ensure_valid(&collection, &payload)?;
    let document = json_to_document(&payload)?;

    let db = DatabaseManager::database().await?;
    let id = documents::create_document(&db, &collection, document).await?;

    Ok(ApiResponse::created(json!({
        "id": id,
        "message": format!("Document created in {}", collection),
    })))
}

/// PUT /api/database/collections/:collection/:id - Update a document by ID
pub async fn document_update(
    Path((collection, id)): Path<(String, String)>,
    Json(payload): Json<Value>,
) -> ApiResult<Value> {
    let object_id = parse_object_id(&id)?;
    ensure_valid(&collection, &payload)?;
    let update = json_to_document(&payload)?;

    let db = DatabaseManager::database().await?;
    let matched =
        documents::update_document(&db, &collection, doc! { "_id": object_id }, update).await?;

    if !matched {
        return Err(ApiError::not_found(format!(
            "Document {} not found in {}",
            id, collection
        )));
    }

    Ok(ApiResponse::success(json!({
        "message": format!("Document {} updated in {}", id, collection),
    })))
}

/// DELETE /api/database/collections/:collection/:id - Delete a document by ID
pub async fn document_delete(
    Path((collection, id)): Path<(String, String)>,
) -> ApiResult<Value> {
    let object_id = parse_object_id(&id)?;

    let db = DatabaseManager::database().await?;
    let deleted =
        documents::delete_document(&db, &collection, doc! { "_id": object_id }).await?;

    if !deleted {
        return Err(ApiError::not_found(format!(
            "Document {} not found in {}",
            id, collection
        )));
    }

    Ok(ApiResponse::success(json!({
        "message": format!("Document {} deleted from {}", id, collection),
    })))
}
