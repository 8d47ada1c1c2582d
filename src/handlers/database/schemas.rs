use serde_json::{json, Map, Value};

use crate::middleware::{ApiResponse, ApiResult};
use crate::schemas;

/// GET /api/database/schemas - Dump the schema registry.
/// Returns a mapping of collection names to their JSON Schema definitions.
pub async fn schemas_get() -> ApiResult<Value> {
    let mut entries = Map::new();
    for schema in schemas::all() {
        entries.insert(
            schema.name.clone(),
            json!({
                "json_schema": schema.schema,
                "fields": schema.fields(),
                "required_fields": schema.required_fields(),
            }),
        );
    }

    Ok(ApiResponse::success(json!({ "schemas": entries })))
}
