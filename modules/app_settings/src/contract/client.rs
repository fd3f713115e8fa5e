//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to read and change app settings.
//! NO HTTP - direct function calls.

use super::{
    error::AppSettingsError,
    model::{Actor, AppSettings, AppSettingsValues, UpdateAppSettings},
};
use async_trait::async_trait;

/// App settings API for inter-module communication
#[async_trait]
pub trait AppSettingsApi: Send + Sync {
    /// Get the flattened settings values of an application
    async fn get_app_settings_values(
        &self,
        app_id: &str,
        actor: &Actor,
    ) -> Result<AppSettingsValues, AppSettingsError>;

    /// Get the settings block of an application, creating or migrating it as needed
    async fn get_app_settings(
        &self,
        app_id: &str,
        actor: &Actor,
    ) -> Result<AppSettings, AppSettingsError>;

    /// Apply a partial update to the settings block of an application
    async fn update_app_settings(
        &self,
        app_id: &str,
        update: UpdateAppSettings,
        actor: &Actor,
    ) -> Result<AppSettings, AppSettingsError>;

    /// Create a settings block with default values
    async fn create_default_app_settings(
        &self,
        app_id: &str,
        actor: &Actor,
    ) -> Result<AppSettings, AppSettingsError>;
}
