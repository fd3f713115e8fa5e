//! Configuration for app settings module

use crate::contract::AuthProvider;
use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix; nested keys are separated by `__`
pub const ENV_PREFIX: &str = "APP_SETTINGS__";

/// App settings module configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection string for the block store
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Values written into a newly created settings block
    #[serde(default)]
    pub defaults: DefaultAppSettings,
}

/// Default settings values for new applications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DefaultAppSettings {
    pub db_host: String,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_port: i32,
    /// Written by its wire name, `http` or `jwt`
    #[serde(with = "auth_provider_name")]
    pub auth_provider: AuthProvider,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            defaults: DefaultAppSettings::default(),
        }
    }
}

impl Default for DefaultAppSettings {
    fn default() -> Self {
        Self {
            db_host: "localhost".to_string(),
            db_name: String::new(),
            db_user: "admin".to_string(),
            db_password: "admin".to_string(),
            db_port: 5432,
            auth_provider: AuthProvider::Http,
        }
    }
}

impl Config {
    /// Load configuration: built-in defaults, then the YAML file, then environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0..=65535).contains(&self.defaults.db_port) {
            bail!("default db_port {} is out of range", self.defaults.db_port);
        }
        Ok(())
    }
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

mod auth_provider_name {
    use crate::contract::AuthProvider;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(provider: &AuthProvider, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(provider.as_str())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<AuthProvider, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        AuthProvider::parse(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown auth provider '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.defaults.db_port, 5432);
        assert_eq!(config.defaults.auth_provider, AuthProvider::Http);
    }

    #[test]
    fn test_load_yaml_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "database_url: sqlite://settings.db\ndefaults:\n  db_host: db.internal\n  auth_provider: jwt"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.database_url, "sqlite://settings.db");
        assert_eq!(config.defaults.db_host, "db.internal");
        assert_eq!(config.defaults.auth_provider, AuthProvider::Jwt);
        // untouched keys keep their defaults
        assert_eq!(config.defaults.db_user, "admin");
    }

    #[test]
    fn test_unknown_auth_provider_rejected() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "defaults:\n  auth_provider: saml").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("saml"), "unexpected error: {err}");
    }
}
