//! Entity to model mappers
//!
//! Conversions between SeaORM entities and domain blocks

use super::entity;
use crate::contract::AppSettingsError;
use crate::domain::{Block, BlockType};

impl TryFrom<entity::Model> for Block {
    type Error = AppSettingsError;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let block_type = BlockType::parse(&entity.block_type).ok_or_else(|| {
            AppSettingsError::internal(format!(
                "block {} has unknown type '{}'",
                entity.id, entity.block_type
            ))
        })?;

        Ok(Self {
            id: entity.id,
            app_id: entity.app_id,
            block_type,
            data: entity.data,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl From<&Block> for entity::ActiveModel {
    fn from(block: &Block) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(block.id),
            app_id: Set(block.app_id.clone()),
            block_type: Set(block.block_type.as_str().to_string()),
            data: Set(block.data.clone()),
            created_at: Set(block.created_at),
            updated_at: Set(block.updated_at),
        }
    }
}

impl From<sea_orm::DbErr> for AppSettingsError {
    fn from(error: sea_orm::DbErr) -> Self {
        Self::internal(error)
    }
}
