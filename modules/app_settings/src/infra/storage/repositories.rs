//! SeaORM block store implementation

use crate::contract::{Actor, AppSettingsError};
use crate::domain::block_store::merge_payload;
use crate::domain::validation::validate_block_payload;
use crate::domain::{Block, BlockStore, BlockType, NewBlock};
use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use super::entity;

pub struct SeaOrmBlockStore {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmBlockStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Register an application in a workspace
    pub async fn register_app(
        &self,
        app_id: &str,
        workspace_id: Uuid,
        name: &str,
    ) -> Result<(), AppSettingsError> {
        let app = entity::app::ActiveModel {
            id: Set(app_id.to_string()),
            workspace_id: Set(workspace_id),
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now()),
        };
        entity::app::Entity::insert(app).exec(&*self.db).await?;

        tracing::debug!(app_id, %workspace_id, "Application registered");
        Ok(())
    }

    /// Check that the application exists and belongs to the actor's workspace
    async fn authorize(&self, app_id: &str, actor: &Actor) -> Result<(), AppSettingsError> {
        let app = entity::app::Entity::find_by_id(app_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| AppSettingsError::not_found("app", app_id))?;

        if app.workspace_id != actor.workspace_id {
            return Err(AppSettingsError::PermissionDenied {
                reason: format!(
                    "user {} may not access app '{}'",
                    actor.user_id, app_id
                ),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BlockStore for SeaOrmBlockStore {
    async fn find_many_by_block_type(
        &self,
        app_id: &str,
        block_type: BlockType,
        actor: &Actor,
    ) -> Result<Vec<Block>, AppSettingsError> {
        self.authorize(app_id, actor).await?;

        let results = entity::Entity::find()
            .filter(entity::Column::AppId.eq(app_id))
            .filter(entity::Column::BlockType.eq(block_type.as_str()))
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        results.into_iter().map(Block::try_from).collect()
    }

    async fn create(&self, block: NewBlock, actor: &Actor) -> Result<Block, AppSettingsError> {
        self.authorize(&block.app_id, actor).await?;
        validate_block_payload(block.block_type, &block.data)?;

        let now = chrono::Utc::now();
        let block = Block {
            id: Uuid::new_v4(),
            app_id: block.app_id,
            block_type: block.block_type,
            data: block.data,
            created_at: now,
            updated_at: now,
        };

        let active: entity::ActiveModel = (&block).into();
        entity::Entity::insert(active).exec(&*self.db).await?;

        Ok(block)
    }

    async fn update(
        &self,
        block_id: Uuid,
        data: Value,
        actor: &Actor,
    ) -> Result<Block, AppSettingsError> {
        let existing = entity::Entity::find_by_id(block_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| AppSettingsError::not_found("block", block_id.to_string()))?;
        self.authorize(&existing.app_id, actor).await?;

        let mut block = Block::try_from(existing)?;
        merge_payload(&mut block.data, data);
        validate_block_payload(block.block_type, &block.data)?;
        block.updated_at = chrono::Utc::now();

        let active: entity::ActiveModel = (&block).into();
        let result = entity::Entity::update(active).exec(&*self.db).await?;

        Block::try_from(result)
    }
}
