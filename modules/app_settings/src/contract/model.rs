//! Contract models for app settings
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Authentication provider generated into the application backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthProvider {
    /// HTTP basic authentication
    #[default]
    Http,
    /// JSON Web Token authentication
    Jwt,
}

impl AuthProvider {
    /// Wire name used in stored payloads and DTOs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Jwt => "jwt",
        }
    }

    /// Parse a wire name, `None` for unknown providers
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "http" => Some(Self::Http),
            "jwt" => Some(Self::Jwt),
            _ => None,
        }
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings block of one application, always in current schema form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    /// Block identifier assigned by the block store
    pub id: Uuid,
    /// Owning application
    pub app_id: String,
    pub db_host: String,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_port: i32,
    pub auth_provider: AuthProvider,
    pub generate_admin_ui: bool,
    pub generate_graphql: bool,
    pub generate_rest_api: bool,
    pub generate_root_files: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Flattened settings values without block metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettingsValues {
    pub app_id: String,
    pub db_host: String,
    pub db_name: String,
    pub db_password: String,
    pub db_port: i32,
    pub db_user: String,
    pub auth_provider: AuthProvider,
    pub generate_admin_ui: bool,
    pub generate_graphql: bool,
    pub generate_rest_api: bool,
    pub generate_root_files: bool,
}

/// Partial update of a settings block; `None` leaves the stored field as is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAppSettings {
    pub db_host: Option<String>,
    pub db_name: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub db_port: Option<i32>,
    pub auth_provider: Option<AuthProvider>,
    pub generate_admin_ui: Option<bool>,
    pub generate_graphql: Option<bool>,
    pub generate_rest_api: Option<bool>,
    pub generate_root_files: Option<bool>,
}

/// Identity on whose behalf the block store is called
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// Acting user
    pub user_id: Uuid,
    /// Workspace the user is acting in
    pub workspace_id: Uuid,
}

impl Actor {
    pub fn new(user_id: Uuid, workspace_id: Uuid) -> Self {
        Self {
            user_id,
            workspace_id,
        }
    }
}

impl From<AppSettings> for AppSettingsValues {
    fn from(settings: AppSettings) -> Self {
        Self {
            app_id: settings.app_id,
            db_host: settings.db_host,
            db_name: settings.db_name,
            db_password: settings.db_password,
            db_port: settings.db_port,
            db_user: settings.db_user,
            auth_provider: settings.auth_provider,
            generate_admin_ui: settings.generate_admin_ui,
            generate_graphql: settings.generate_graphql,
            generate_rest_api: settings.generate_rest_api,
            generate_root_files: settings.generate_root_files,
        }
    }
}
