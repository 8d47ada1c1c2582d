use axum::response::Json;
use serde_json::{json, Value};

use crate::config;
use crate::database::manager::{DatabaseError, DatabaseManager};

/// GET / - Service banner
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "docstore API",
            "version": version,
            "message": "Hello from the docstore backend!",
            "endpoints": {
                "hello": "/api/hello",
                "diagnostics": "/test",
                "schemas": "/api/database/schemas",
                "collections": "/api/database/collections[/:collection]",
                "validate": "/api/database/collections/:collection/validate",
                "create": "/api/database/collections/:collection/create",
                "update_delete": "/api/database/collections/:collection/:id",
            }
        }
    }))
}

/// GET /api/hello - Greeting endpoint
pub async fn hello() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": { "message": "Hello from the backend API!" }
    }))
}

/// GET /test - Diagnostic probe. Always returns 200 with a status report,
/// whether or not the database is configured or reachable.
pub async fn test() -> Json<Value> {
    let database = &config::config().database;

    let mut report = json!({
        "backend": "running",
        "database": "not_available",
        "database_url": if database.url.is_some() { "set" } else { "not_set" },
        "database_name": if database.name.is_some() { "set" } else { "not_set" },
        "connection_status": "not_connected",
        "collections": [],
        "timestamp": chrono::Utc::now(),
    });

    match DatabaseManager::database().await {
        Ok(db) => match db.list_collection_names().await {
            Ok(names) => {
                report["database"] = json!("connected");
                report["connection_status"] = json!("connected");
                // Preview only; large deployments can have many collections
                let preview: Vec<&String> = names.iter().take(10).collect();
                report["collections"] = json!(preview);
            }
            Err(e) => {
                report["database"] = json!(format!("configured_but_unreachable: {}", e));
            }
        },
        Err(DatabaseError::NotConfigured) => {
            // Report already reflects the missing settings
        }
        Err(e) => {
            report["database"] = json!(format!("error: {}", e));
        }
    }

    Json(json!({ "success": true, "data": report }))
}
