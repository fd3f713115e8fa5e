//! Block store trait for data access
//!
//! The block store keeps typed JSON blocks owned by applications. It enforces
//! authorization and payload validation; its errors are passed through as is.
//! Implementation is in infra/storage/repositories.rs

use crate::contract::{Actor, AppSettingsError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// Type tag of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    AppSettings,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppSettings => "AppSettings",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AppSettings" => Some(Self::AppSettings),
            _ => None,
        }
    }
}

/// Stored block
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: Uuid,
    /// Owning application
    pub app_id: String,
    pub block_type: BlockType,
    /// Block payload as a JSON object
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Block to be created, linked to its owning application
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlock {
    pub app_id: String,
    pub block_type: BlockType,
    pub data: Value,
}

#[async_trait]
pub trait BlockStore: Send + Sync {
    /// Find all blocks of a type owned by an application, oldest first
    async fn find_many_by_block_type(
        &self,
        app_id: &str,
        block_type: BlockType,
        actor: &Actor,
    ) -> Result<Vec<Block>, AppSettingsError>;

    /// Create a block linked to `block.app_id`
    async fn create(&self, block: NewBlock, actor: &Actor) -> Result<Block, AppSettingsError>;

    /// Merge `data` into the payload of an existing block
    async fn update(
        &self,
        block_id: Uuid,
        data: Value,
        actor: &Actor,
    ) -> Result<Block, AppSettingsError>;
}

/// Shallow-merge the top-level keys of `patch` into `target`.
///
/// A non-object target is replaced by an empty object first; a non-object
/// patch replaces the target entirely.
pub fn merge_payload(target: &mut Value, patch: Value) {
    let Value::Object(patch) = patch else {
        *target = patch;
        return;
    };
    if !target.is_object() {
        *target = Value::Object(serde_json::Map::new());
    }
    if let Value::Object(fields) = target {
        for (key, value) in patch {
            fields.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_payload_keeps_untouched_keys() {
        let mut stored = json!({"dbHost": "h", "generateAdminUI": false});
        merge_payload(&mut stored, json!({"generateAdminUI": true}));
        assert_eq!(stored, json!({"dbHost": "h", "generateAdminUI": true}));
    }

    #[test]
    fn test_merge_payload_into_non_object() {
        let mut stored = Value::Null;
        merge_payload(&mut stored, json!({"dbPort": 5432}));
        assert_eq!(stored, json!({"dbPort": 5432}));
    }

    #[test]
    fn test_block_type_round_trips_tag() {
        assert_eq!(BlockType::parse(BlockType::AppSettings.as_str()), Some(BlockType::AppSettings));
        assert_eq!(BlockType::parse("EntityField"), None);
    }
}
