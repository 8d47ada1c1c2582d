use bson::{doc, DateTime, Document};
use futures::TryStreamExt;
use mongodb::Database;

use super::manager::DatabaseError;

/// Insert a single document, stamping `created_at` and `updated_at`.
/// Returns the inserted document id as a hex string.
pub async fn create_document(
    db: &Database,
    collection: &str,
    mut document: Document,
) -> Result<String, DatabaseError> {
    stamp_for_insert(&mut document);

    let result = db
        .collection::<Document>(collection)
        .insert_one(document)
        .await?;

    let id = result
        .inserted_id
        .as_object_id()
        .map(|id| id.to_hex())
        .unwrap_or_else(|| result.inserted_id.to_string());
    Ok(id)
}

/// Get documents from a collection, with optional limit and skip
pub async fn get_documents(
    db: &Database,
    collection: &str,
    filter: Document,
    limit: Option<i64>,
    skip: Option<u64>,
) -> Result<Vec<Document>, DatabaseError> {
    let coll = db.collection::<Document>(collection);
    let mut find = coll.find(filter);
    if let Some(limit) = limit {
        find = find.limit(limit);
    }
    if let Some(skip) = skip {
        find = find.skip(skip);
    }

    let documents = find.await?.try_collect().await?;
    Ok(documents)
}

pub async fn count_documents(
    db: &Database,
    collection: &str,
    filter: Document,
) -> Result<u64, DatabaseError> {
    let count = db
        .collection::<Document>(collection)
        .count_documents(filter)
        .await?;
    Ok(count)
}

/// Update a single document matching the filter, stamping `updated_at`.
/// Fields are applied via `$set`. Returns true if a document matched.
pub async fn update_document(
    db: &Database,
    collection: &str,
    filter: Document,
    mut update: Document,
) -> Result<bool, DatabaseError> {
    stamp_for_update(&mut update);

    let result = db
        .collection::<Document>(collection)
        .update_one(filter, doc! { "$set": update })
        .await?;

    Ok(result.matched_count > 0)
}

/// Delete a single document matching the filter. Returns true if one was deleted.
pub async fn delete_document(
    db: &Database,
    collection: &str,
    filter: Document,
) -> Result<bool, DatabaseError> {
    let result = db
        .collection::<Document>(collection)
        .delete_one(filter)
        .await?;
    Ok(result.deleted_count > 0)
}

/// Stamp both lifecycle timestamps. Overwrites any client-supplied values.
pub fn stamp_for_insert(document: &mut Document) {
    let now = DateTime::now();
    document.insert("created_at", now);
    document.insert("updated_at", now);
}

/// Stamp `updated_at` only. Overwrites any client-supplied value.
pub fn stamp_for_update(update: &mut Document) {
    update.insert("updated_at", DateTime::now());
}
