//! Database migrations for the block store

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_apps::Migration),
            Box::new(m20250301_000002_create_blocks::Migration),
        ]
    }
}

mod m20250301_000001_create_apps;
mod m20250301_000002_create_blocks;
