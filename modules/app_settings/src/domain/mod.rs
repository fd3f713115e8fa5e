//! Domain layer - business logic and services

pub mod block_store;
pub mod service;
pub mod settings;
pub mod validation;

pub use block_store::{Block, BlockStore, BlockType, NewBlock};
pub use service::Service;
pub use settings::{AppSettingsPayload, SettingsState};
