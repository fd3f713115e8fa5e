//! Module wiring: database, migrations, block store, service and transports

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::AppSettingsApi;
use crate::domain::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::SeaOrmBlockStore;
use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// App settings module
pub struct AppSettingsModule {
    config: Config,
    block_store: Arc<SeaOrmBlockStore>,
    service: Arc<Service>,
}

impl AppSettingsModule {
    /// Connect to the configured database, run migrations and build the service
    pub async fn init(config: Config) -> Result<Self> {
        config.validate()?;

        let conn = Database::connect(config.database_url.as_str()).await?;
        Self::with_connection(config, conn).await
    }

    /// Build the module over an existing connection
    pub async fn with_connection(config: Config, conn: DatabaseConnection) -> Result<Self> {
        Migrator::up(&conn, None).await?;
        tracing::info!("App settings migrations completed");

        let block_store = Arc::new(SeaOrmBlockStore::new(Arc::new(conn)));
        let service = Arc::new(Service::new(
            block_store.clone(),
            config.defaults.clone(),
        ));

        tracing::info!("App settings module initialized");
        Ok(Self {
            config,
            block_store,
            service,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Block store backing the service
    pub fn block_store(&self) -> Arc<SeaOrmBlockStore> {
        self.block_store.clone()
    }

    /// In-process client
    pub fn client(&self) -> Arc<dyn AppSettingsApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// Mount the REST routes on `router`
    pub fn router(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering app settings REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }
}
