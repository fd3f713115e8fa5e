//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Blocks table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "blocks")]
pub struct Model {
    /// Block identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owning application
    pub app_id: String,

    /// Block type tag (e.g., "AppSettings")
    pub block_type: String,

    /// Block payload as JSON
    pub data: Json,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Foreign key to apps
    #[sea_orm(
        belongs_to = "app::Entity",
        from = "Column::AppId",
        to = "app::Column::Id"
    )]
    App,
}

impl Related<app::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::App.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Applications module
pub mod app {
    use sea_orm::entity::prelude::*;

    /// Applications table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "apps")]
    pub struct Model {
        /// Application identifier (primary key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,

        /// Workspace that owns the application
        pub workspace_id: Uuid,

        /// Display name
        pub name: String,

        /// Creation timestamp
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with blocks
        #[sea_orm(has_many = "super::Entity")]
        Blocks,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Blocks.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
