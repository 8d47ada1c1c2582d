//! Static registry of per-collection JSON Schemas, enforced (optionally) at
//! write time. Collections without a registered schema skip validation.

use once_cell::sync::{Lazy, OnceCell};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid schema definition for '{collection}': {message}")]
    InvalidDefinition { collection: String, message: String },
}

/// A JSON Schema bound to a collection name. Names are matched
/// case-insensitively against collection names.
pub struct CollectionSchema {
    pub name: String,
    pub schema: Value,
    // Compiled on first use; the registry is static so one compile per entry
    validator: OnceCell<jsonschema::Validator>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// JSON pointer into the offending part of the document
    pub path: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ValidationOutcome {
    /// No schema registered for this collection; validation skipped
    NoSchema,
    Valid,
    Invalid(Vec<ValidationIssue>),
}

impl CollectionSchema {
    pub fn new(name: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            schema,
            validator: OnceCell::new(),
        }
    }

    /// Property names declared by the schema
    pub fn fields(&self) -> Vec<String> {
        self.schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|properties| properties.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn required_fields(&self) -> Vec<String> {
        self.schema
            .get("required")
            .and_then(Value::as_array)
            .map(|required| {
                required
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn validator(&self) -> Result<&jsonschema::Validator, SchemaError> {
        self.validator.get_or_try_init(|| {
            jsonschema::validator_for(&self.schema).map_err(|e| SchemaError::InvalidDefinition {
                collection: self.name.clone(),
                message: e.to_string(),
            })
        })
    }

    fn check(&self, document: &Value) -> Result<Vec<ValidationIssue>, SchemaError> {
        let issues = self
            .validator()?
            .iter_errors(document)
            .map(|error| ValidationIssue {
                path: error.instance_path.to_string(),
                message: error.to_string(),
            })
            .collect();
        Ok(issues)
    }
}

static REGISTRY: Lazy<Vec<CollectionSchema>> = Lazy::new(builtin_schemas);

/// Define your collection schemas here. This is the single source of truth
/// for data structure; collections not listed accept any document.
fn builtin_schemas() -> Vec<CollectionSchema> {
    vec![
        // Example (uncomment and adapt):
        //
        // CollectionSchema::new(
        //     "users",
        //     serde_json::json!({
        //         "type": "object",
        //         "properties": {
        //             "username": { "type": "string", "minLength": 1 },
        //             "email": { "type": "string", "format": "email" }
        //         },
        //         "required": ["username", "email"]
        //     }),
        // ),
    ]
}

pub fn all() -> &'static [CollectionSchema] {
    &REGISTRY
}

pub fn lookup(collection: &str) -> Option<&'static CollectionSchema> {
    REGISTRY
        .iter()
        .find(|schema| schema.name.eq_ignore_ascii_case(collection))
}

/// Validate a document against the schema registered for a collection
pub fn validate(collection: &str, document: &Value) -> Result<ValidationOutcome, SchemaError> {
    let Some(schema) = lookup(collection) else {
        return Ok(ValidationOutcome::NoSchema);
    };

    let issues = schema.check(document)?;
    if issues.is_empty() {
        Ok(ValidationOutcome::Valid)
    } else {
        Ok(ValidationOutcome::Invalid(issues))
    }
}
