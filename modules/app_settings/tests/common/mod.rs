//! Common test utilities: in-memory block store and fixtures

#![allow(dead_code)]

use app_settings::config::DefaultAppSettings;
use app_settings::contract::{Actor, AppSettingsError};
use app_settings::domain::block_store::merge_payload;
use app_settings::domain::{Block, BlockStore, BlockType, NewBlock, Service};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn test_actor() -> Actor {
    Actor::new(Uuid::new_v4(), Uuid::new_v4())
}

/// Call counters of the mock block store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub finds: usize,
    pub creates: usize,
    pub updates: usize,
}

/// In-memory block store.
///
/// Blocks are kept under the application they were queried/created for, so a
/// test can seed a block whose own `app_id` differs from its owner key.
#[derive(Clone, Default)]
pub struct MockBlockStore {
    blocks: Arc<RwLock<Vec<(String, Block)>>>,
    missing_apps: Arc<RwLock<HashSet<String>>>,
    denied_apps: Arc<RwLock<HashSet<String>>>,
    invalid_updates: Arc<RwLock<HashMap<String, String>>>,
    calls: Arc<RwLock<CallCounts>>,
}

impl MockBlockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a settings block for `app_id`, `age_secs` seconds old
    pub fn seed(&self, app_id: &str, data: Value, age_secs: i64) -> Uuid {
        self.seed_with_app_id(app_id, app_id, data, age_secs)
    }

    pub fn seed_with_app_id(
        &self,
        owner: &str,
        stored_app_id: &str,
        data: Value,
        age_secs: i64,
    ) -> Uuid {
        let created_at = Utc::now() - Duration::seconds(age_secs);
        let block = Block {
            id: Uuid::new_v4(),
            app_id: stored_app_id.to_string(),
            block_type: BlockType::AppSettings,
            data,
            created_at,
            updated_at: created_at,
        };
        let id = block.id;
        self.blocks.write().push((owner.to_string(), block));
        id
    }

    /// Calls for this app fail with NotFound
    pub fn mark_missing(&self, app_id: &str) {
        self.missing_apps.write().insert(app_id.to_string());
    }

    /// Calls for this app fail with PermissionDenied
    pub fn deny(&self, app_id: &str) {
        self.denied_apps.write().insert(app_id.to_string());
    }

    /// Updates carrying `key` fail with Validation
    pub fn reject_updates_with_key(&self, key: &str, message: &str) {
        self.invalid_updates
            .write()
            .insert(key.to_string(), message.to_string());
    }

    pub fn calls(&self) -> CallCounts {
        *self.calls.read()
    }

    pub fn blocks_for(&self, app_id: &str) -> Vec<Block> {
        self.blocks
            .read()
            .iter()
            .filter(|(owner, _)| owner == app_id)
            .map(|(_, block)| block.clone())
            .collect()
    }

    pub fn stored_data(&self, block_id: Uuid) -> Option<Value> {
        self.blocks
            .read()
            .iter()
            .find(|(_, block)| block.id == block_id)
            .map(|(_, block)| block.data.clone())
    }

    fn check_access(&self, app_id: &str) -> Result<(), AppSettingsError> {
        if self.missing_apps.read().contains(app_id) {
            return Err(AppSettingsError::not_found("app", app_id));
        }
        if self.denied_apps.read().contains(app_id) {
            return Err(AppSettingsError::PermissionDenied {
                reason: format!("no access to app '{}'", app_id),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BlockStore for MockBlockStore {
    async fn find_many_by_block_type(
        &self,
        app_id: &str,
        block_type: BlockType,
        _actor: &Actor,
    ) -> Result<Vec<Block>, AppSettingsError> {
        self.calls.write().finds += 1;
        self.check_access(app_id)?;

        let mut found: Vec<Block> = self
            .blocks
            .read()
            .iter()
            .filter(|(owner, block)| owner == app_id && block.block_type == block_type)
            .map(|(_, block)| block.clone())
            .collect();
        found.sort_by_key(|block| block.created_at);
        Ok(found)
    }

    async fn create(&self, block: NewBlock, _actor: &Actor) -> Result<Block, AppSettingsError> {
        self.calls.write().creates += 1;
        self.check_access(&block.app_id)?;

        let now = Utc::now();
        let created = Block {
            id: Uuid::new_v4(),
            app_id: block.app_id.clone(),
            block_type: block.block_type,
            data: block.data,
            created_at: now,
            updated_at: now,
        };
        self.blocks.write().push((block.app_id, created.clone()));
        Ok(created)
    }

    async fn update(
        &self,
        block_id: Uuid,
        data: Value,
        _actor: &Actor,
    ) -> Result<Block, AppSettingsError> {
        self.calls.write().updates += 1;

        let owner = self
            .blocks
            .read()
            .iter()
            .find(|(_, block)| block.id == block_id)
            .map(|(owner, _)| owner.clone())
            .ok_or_else(|| AppSettingsError::not_found("block", block_id.to_string()))?;
        self.check_access(&owner)?;

        if let Value::Object(fields) = &data {
            for (key, message) in self.invalid_updates.read().iter() {
                if fields.contains_key(key) {
                    return Err(AppSettingsError::Validation {
                        message: message.clone(),
                    });
                }
            }
        }

        let mut blocks = self.blocks.write();
        let (_, block) = blocks
            .iter_mut()
            .find(|(_, block)| block.id == block_id)
            .ok_or_else(|| AppSettingsError::not_found("block", block_id.to_string()))?;
        merge_payload(&mut block.data, data);
        block.updated_at = Utc::now();
        Ok(block.clone())
    }
}

pub fn create_test_service() -> (Service, Arc<MockBlockStore>) {
    let store = Arc::new(MockBlockStore::new());
    let service = Service::new(store.clone(), DefaultAppSettings::default());
    (service, store)
}
