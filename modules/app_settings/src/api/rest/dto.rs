//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Auth provider DTO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuthProviderDto {
    Http,
    Jwt,
}

/// Settings values response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AppSettingsValuesDto {
    /// Application ID
    #[serde(rename = "appId")]
    #[schema(example = "app-1")]
    pub app_id: String,

    #[serde(rename = "dbHost")]
    #[schema(example = "localhost")]
    pub db_host: String,

    #[serde(rename = "dbName")]
    pub db_name: String,

    #[serde(rename = "dbPassword")]
    pub db_password: String,

    #[serde(rename = "dbPort")]
    #[schema(example = 5432)]
    pub db_port: i32,

    #[serde(rename = "dbUser")]
    pub db_user: String,

    #[serde(rename = "authProvider")]
    pub auth_provider: AuthProviderDto,

    #[serde(rename = "generateAdminUI")]
    pub generate_admin_ui: bool,

    #[serde(rename = "generateGraphQL")]
    pub generate_graphql: bool,

    #[serde(rename = "generateRestApi")]
    pub generate_rest_api: bool,

    #[serde(rename = "generateRootFiles")]
    pub generate_root_files: bool,
}

/// Settings block response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AppSettingsDto {
    /// Block ID
    pub id: Uuid,

    /// Settings values
    #[serde(flatten)]
    pub values: AppSettingsValuesDto,

    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Last update timestamp
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Partial settings update request; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateAppSettingsRequest {
    #[serde(rename = "dbHost", default)]
    pub db_host: Option<String>,

    #[serde(rename = "dbName", default)]
    pub db_name: Option<String>,

    #[serde(rename = "dbUser", default)]
    pub db_user: Option<String>,

    #[serde(rename = "dbPassword", default)]
    pub db_password: Option<String>,

    #[serde(rename = "dbPort", default)]
    pub db_port: Option<i32>,

    #[serde(rename = "authProvider", default)]
    pub auth_provider: Option<AuthProviderDto>,

    #[serde(rename = "generateAdminUI", default)]
    pub generate_admin_ui: Option<bool>,

    #[serde(rename = "generateGraphQL", default)]
    pub generate_graphql: Option<bool>,

    #[serde(rename = "generateRestApi", default)]
    pub generate_rest_api: Option<bool>,

    #[serde(rename = "generateRootFiles", default)]
    pub generate_root_files: Option<bool>,
}

// Note: Conversion implementations live in mapper.rs
