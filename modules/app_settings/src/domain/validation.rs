//! JSON Schema validation for block payloads

use super::block_store::BlockType;
use crate::contract::AppSettingsError;
use jsonschema::Validator;
use serde_json::{json, Value};

/// JSON Schema a stored payload of `block_type` must satisfy.
///
/// Every key is optional and nullable so that legacy payloads stay writable.
pub fn block_schema(block_type: BlockType) -> Value {
    match block_type {
        BlockType::AppSettings => json!({
            "type": "object",
            "properties": {
                "dbHost": { "type": ["string", "null"] },
                "dbName": { "type": ["string", "null"] },
                "dbUser": { "type": ["string", "null"] },
                "dbPassword": { "type": ["string", "null"] },
                "dbPort": { "type": ["integer", "null"], "minimum": 0, "maximum": 65535 },
                "authProvider": { "enum": ["http", "jwt", null] },
                "generateAdminUI": { "type": ["boolean", "null"] },
                "generateGraphQL": { "type": ["boolean", "null"] },
                "generateRestApi": { "type": ["boolean", "null"] },
                "generateRootFiles": { "type": ["boolean", "null"] }
            }
        }),
    }
}

/// Validate a block payload against the schema of its type
pub fn validate_block_payload(block_type: BlockType, data: &Value) -> Result<(), AppSettingsError> {
    validate_against_schema(data, &block_schema(block_type))
}

/// Validate a value against a JSON Schema
pub fn validate_against_schema(data: &Value, schema: &Value) -> Result<(), AppSettingsError> {
    let validator = Validator::new(schema).map_err(|e| AppSettingsError::Internal {
        message: format!("Invalid JSON Schema: {}", e),
    })?;

    let errors: Vec<String> = validator.iter_errors(data).map(|e| e.to_string()).collect();
    if !errors.is_empty() {
        return Err(AppSettingsError::Validation {
            message: errors.join(", "),
        });
    }

    Ok(())
}
