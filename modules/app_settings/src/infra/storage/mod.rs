//! Storage layer - database entities and the block store

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

pub use repositories::SeaOrmBlockStore;
