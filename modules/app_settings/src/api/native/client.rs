//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Actor, AppSettings, AppSettingsApi, AppSettingsError, AppSettingsValues, UpdateAppSettings,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// Used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AppSettingsApi for NativeClient {
    async fn get_app_settings_values(
        &self,
        app_id: &str,
        actor: &Actor,
    ) -> Result<AppSettingsValues, AppSettingsError> {
        self.service.get_app_settings_values(app_id, actor).await
    }

    async fn get_app_settings(
        &self,
        app_id: &str,
        actor: &Actor,
    ) -> Result<AppSettings, AppSettingsError> {
        self.service.get_app_settings(app_id, actor).await
    }

    async fn update_app_settings(
        &self,
        app_id: &str,
        update: UpdateAppSettings,
        actor: &Actor,
    ) -> Result<AppSettings, AppSettingsError> {
        self.service.update_app_settings(app_id, update, actor).await
    }

    async fn create_default_app_settings(
        &self,
        app_id: &str,
        actor: &Actor,
    ) -> Result<AppSettings, AppSettingsError> {
        self.service.create_default_app_settings(app_id, actor).await
    }
}
