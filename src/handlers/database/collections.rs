use axum::extract::{Path, Query};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::format::documents_to_api_values;
use crate::config;
use crate::database::{documents, DatabaseManager};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

use super::utils::{parse_filter, resolve_limit};

#[derive(Debug, Deserialize)]
pub struct CollectionQuery {
    /// Max documents to return; capped by the configured page-size limit
    pub limit: Option<i64>,
    /// Number of documents to skip (pagination)
    pub skip: Option<u64>,
    /// JSON object string, passed to the driver as-is (e.g. {"status": "active"})
    pub filter: Option<String>,
}

/// GET /api/database/collections - List collections with document counts
pub async fn collections_list() -> ApiResult<Value> {
    let db = DatabaseManager::database().await?;
    let names = db.list_collection_names().await?;

    let mut collections = Vec::with_capacity(names.len());
    for name in names {
        let count = documents::count_documents(&db, &name, bson::Document::new()).await?;
        collections.push(json!({ "name": name, "count": count }));
    }

    Ok(ApiResponse::success(json!({ "collections": collections })))
}

/// GET /api/database/collections/:collection - Page through a collection
pub async fn collection_get(
    Path(collection): Path<String>,
    Query(query): Query<CollectionQuery>,
) -> ApiResult<Value> {
    // Reject malformed input before touching the store
    let filter = parse_filter(query.filter.as_deref())?;

    let limit = resolve_limit(query.limit, &config::config().api)?;
    let skip = query.skip.unwrap_or(0);

    let db = DatabaseManager::database().await?;

    let names = db.list_collection_names().await?;
    if !names.contains(&collection) {
        return Err(ApiError::not_found(format!(
            "Collection '{}' not found",
            collection
        )));
    }

    let total = documents::count_documents(&db, &collection, filter.clone()).await?;
    let page = documents::get_documents(&db, &collection, filter, Some(limit), Some(skip)).await?;

    Ok(ApiResponse::success(json!({
        "collection": collection,
        "documents": documents_to_api_values(&page),
        "total": total,
        "limit": limit,
        "skip": skip,
    })))
}
