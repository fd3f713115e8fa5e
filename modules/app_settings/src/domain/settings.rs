//! Stored settings payload, schema-state detection and write-time invariants
//!
//! The block store keeps settings as a loosely typed JSON object. Blocks written
//! before the code-generation switches existed have no `generateGraphQL` key;
//! those are `Legacy` until the resolver backfills them.

use super::block_store::Block;
use crate::config::DefaultAppSettings;
use crate::contract::{AppSettings, AppSettingsError, AuthProvider, UpdateAppSettings};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// JSON representation of a settings block payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettingsPayload {
    #[serde(rename = "dbHost", default, skip_serializing_if = "Option::is_none")]
    pub db_host: Option<String>,
    #[serde(rename = "dbName", default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    #[serde(rename = "dbUser", default, skip_serializing_if = "Option::is_none")]
    pub db_user: Option<String>,
    #[serde(rename = "dbPassword", default, skip_serializing_if = "Option::is_none")]
    pub db_password: Option<String>,
    #[serde(rename = "dbPort", default, skip_serializing_if = "Option::is_none")]
    pub db_port: Option<i32>,
    #[serde(rename = "authProvider", default, skip_serializing_if = "Option::is_none")]
    pub auth_provider: Option<String>,
    #[serde(rename = "generateAdminUI", default, skip_serializing_if = "Option::is_none")]
    pub generate_admin_ui: Option<bool>,
    #[serde(
        rename = "generateGraphQL",
        default,
        deserialize_with = "empty_switch_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub generate_graphql: Option<bool>,
    #[serde(rename = "generateRestApi", default, skip_serializing_if = "Option::is_none")]
    pub generate_rest_api: Option<bool>,
    #[serde(rename = "generateRootFiles", default, skip_serializing_if = "Option::is_none")]
    pub generate_root_files: Option<bool>,
}

/// Older editors stored an unset switch as `""`; read it the same as a missing key.
fn empty_switch_as_none<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Switch {
        Flag(bool),
        Text(String),
    }

    match Option::<Switch>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Switch::Flag(flag)) => Ok(Some(flag)),
        Some(Switch::Text(text)) if text.is_empty() => Ok(None),
        Some(Switch::Text(text)) => Err(D::Error::custom(format!(
            "invalid switch value '{}', expected a boolean",
            text
        ))),
    }
}

impl AppSettingsPayload {
    /// Decode a stored payload
    pub fn from_value(data: Value) -> Result<Self, AppSettingsError> {
        serde_json::from_value(data).map_err(|e| AppSettingsError::Validation {
            message: format!("malformed app settings payload: {}", e),
        })
    }

    /// Encode for the block store; absent fields are omitted
    pub fn to_value(&self) -> Result<Value, AppSettingsError> {
        serde_json::to_value(self).map_err(AppSettingsError::internal)
    }

    /// Written before the code-generation switches existed, or with the
    /// GraphQL switch left empty
    pub fn is_legacy(&self) -> bool {
        self.generate_graphql.is_none()
    }

    /// Upgrade payload for a legacy block: every switch on, connection fields
    /// and auth provider carried over as stored.
    pub fn backfilled(&self) -> Self {
        Self {
            db_host: self.db_host.clone(),
            db_name: self.db_name.clone(),
            db_user: self.db_user.clone(),
            db_password: self.db_password.clone(),
            db_port: self.db_port,
            auth_provider: self.auth_provider.clone(),
            generate_admin_ui: Some(true),
            generate_graphql: Some(true),
            generate_rest_api: Some(true),
            generate_root_files: Some(true),
        }
    }

    /// Build the current-form record. A missing auth provider reads as `Http`;
    /// missing switches read as off.
    pub fn into_settings(self, block: &Block) -> Result<AppSettings, AppSettingsError> {
        let auth_provider = match self.auth_provider.as_deref() {
            None | Some("") => AuthProvider::Http,
            Some(name) => AuthProvider::parse(name).ok_or_else(|| AppSettingsError::Validation {
                message: format!("unknown auth provider '{}'", name),
            })?,
        };

        Ok(AppSettings {
            id: block.id,
            app_id: block.app_id.clone(),
            db_host: self.db_host.unwrap_or_default(),
            db_name: self.db_name.unwrap_or_default(),
            db_user: self.db_user.unwrap_or_default(),
            db_password: self.db_password.unwrap_or_default(),
            db_port: self.db_port.unwrap_or_default(),
            auth_provider,
            generate_admin_ui: self.generate_admin_ui.unwrap_or_default(),
            generate_graphql: self.generate_graphql.unwrap_or_default(),
            generate_rest_api: self.generate_rest_api.unwrap_or_default(),
            generate_root_files: self.generate_root_files.unwrap_or_default(),
            created_at: block.created_at,
            updated_at: block.updated_at,
        })
    }
}

impl From<&DefaultAppSettings> for AppSettingsPayload {
    fn from(defaults: &DefaultAppSettings) -> Self {
        Self {
            db_host: Some(defaults.db_host.clone()),
            db_name: Some(defaults.db_name.clone()),
            db_user: Some(defaults.db_user.clone()),
            db_password: Some(defaults.db_password.clone()),
            db_port: Some(defaults.db_port),
            auth_provider: Some(defaults.auth_provider.as_str().to_string()),
            generate_admin_ui: Some(true),
            generate_graphql: Some(true),
            generate_rest_api: Some(true),
            generate_root_files: Some(true),
        }
    }
}

impl From<&UpdateAppSettings> for AppSettingsPayload {
    fn from(update: &UpdateAppSettings) -> Self {
        Self {
            db_host: update.db_host.clone(),
            db_name: update.db_name.clone(),
            db_user: update.db_user.clone(),
            db_password: update.db_password.clone(),
            db_port: update.db_port,
            auth_provider: update.auth_provider.map(|p| p.as_str().to_string()),
            generate_admin_ui: update.generate_admin_ui,
            generate_graphql: update.generate_graphql,
            generate_rest_api: update.generate_rest_api,
            generate_root_files: update.generate_root_files,
        }
    }
}

impl TryFrom<Block> for AppSettings {
    type Error = AppSettingsError;

    fn try_from(block: Block) -> Result<Self, Self::Error> {
        AppSettingsPayload::from_value(block.data.clone())?.into_settings(&block)
    }
}

/// Schema state of the settings block found for an application
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsState {
    /// No settings block exists yet
    Absent,
    /// Block predates the code-generation switches
    Legacy {
        block: Block,
        payload: AppSettingsPayload,
    },
    /// Block is in current schema form
    Current {
        block: Block,
        payload: AppSettingsPayload,
    },
}

impl SettingsState {
    pub fn classify(block: Option<Block>) -> Result<Self, AppSettingsError> {
        let Some(block) = block else {
            return Ok(Self::Absent);
        };
        let payload = AppSettingsPayload::from_value(block.data.clone())?;
        if payload.is_legacy() {
            Ok(Self::Legacy { block, payload })
        } else {
            Ok(Self::Current { block, payload })
        }
    }
}

/// Admin UI needs the GraphQL API: an update that turns GraphQL off also turns
/// the admin UI off. Updates that leave `generate_graphql` unset pass through
/// untouched, even if the stored block already has GraphQL off.
pub fn enforce_admin_ui_requires_graphql(update: &mut UpdateAppSettings) {
    if update.generate_graphql == Some(false) {
        update.generate_admin_ui = Some(false);
    }
}
