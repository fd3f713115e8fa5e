//! Domain service - settings lifecycle over the block store
//!
//! Reads materialize the settings block on first access and backfill legacy
//! blocks; writes correct the admin UI / GraphQL combination before storing.
//! There is no locking here. Two first reads racing on one application can both
//! create a block; later reads use the oldest one.

use super::block_store::{BlockStore, BlockType, NewBlock};
use super::settings::{enforce_admin_ui_requires_graphql, AppSettingsPayload, SettingsState};
use crate::config::DefaultAppSettings;
use crate::contract::{Actor, AppSettings, AppSettingsError, AppSettingsValues, UpdateAppSettings};
use std::sync::Arc;

/// Domain service for app settings
pub struct Service {
    block_store: Arc<dyn BlockStore>,
    defaults: DefaultAppSettings,
}

impl Service {
    /// Create a new service instance
    pub fn new(block_store: Arc<dyn BlockStore>, defaults: DefaultAppSettings) -> Self {
        Self {
            block_store,
            defaults,
        }
    }

    /// Get the flattened settings values of an application.
    ///
    /// `app_id` in the result is the requested id, not the one read back.
    pub async fn get_app_settings_values(
        &self,
        app_id: &str,
        actor: &Actor,
    ) -> Result<AppSettingsValues, AppSettingsError> {
        let settings = self.get_app_settings(app_id, actor).await?;

        Ok(AppSettingsValues {
            app_id: app_id.to_string(),
            ..AppSettingsValues::from(settings)
        })
    }

    /// Get the settings block of an application in current form
    pub async fn get_app_settings(
        &self,
        app_id: &str,
        actor: &Actor,
    ) -> Result<AppSettings, AppSettingsError> {
        let blocks = self
            .block_store
            .find_many_by_block_type(app_id, BlockType::AppSettings, actor)
            .await?;

        if blocks.len() > 1 {
            tracing::warn!(
                app_id,
                count = blocks.len(),
                "Multiple app settings blocks found, using the oldest"
            );
        }

        match SettingsState::classify(blocks.into_iter().next())? {
            SettingsState::Absent => {
                tracing::debug!(app_id, "No app settings block, creating defaults");
                self.create_default_app_settings(app_id, actor).await
            }
            SettingsState::Legacy { block, payload } => {
                tracing::info!(app_id, block_id = %block.id, "Backfilling legacy app settings");
                let data = payload.backfilled().to_value()?;
                let updated = self.block_store.update(block.id, data, actor).await?;
                AppSettings::try_from(updated)
            }
            SettingsState::Current { block, payload } => payload.into_settings(&block),
        }
    }

    /// Apply a partial update to the settings block of an application.
    ///
    /// Turning GraphQL off turns the admin UI off in the same write.
    pub async fn update_app_settings(
        &self,
        app_id: &str,
        mut update: UpdateAppSettings,
        actor: &Actor,
    ) -> Result<AppSettings, AppSettingsError> {
        let current = self.get_app_settings(app_id, actor).await?;

        enforce_admin_ui_requires_graphql(&mut update);
        let data = AppSettingsPayload::from(&update).to_value()?;

        let updated = self.block_store.update(current.id, data, actor).await?;
        tracing::debug!(app_id, block_id = %updated.id, "App settings updated");
        AppSettings::try_from(updated)
    }

    /// Create a settings block with the configured defaults.
    ///
    /// Not idempotent: each call creates a new block.
    pub async fn create_default_app_settings(
        &self,
        app_id: &str,
        actor: &Actor,
    ) -> Result<AppSettings, AppSettingsError> {
        let data = AppSettingsPayload::from(&self.defaults).to_value()?;

        let block = self
            .block_store
            .create(
                NewBlock {
                    app_id: app_id.to_string(),
                    block_type: BlockType::AppSettings,
                    data,
                },
                actor,
            )
            .await?;

        tracing::info!(app_id, block_id = %block.id, "Default app settings created");
        AppSettings::try_from(block)
    }
}
