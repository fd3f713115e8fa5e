//! App Settings Module
//!
//! Per-application scaffolding configuration (database connection, auth
//! provider, code-generation switches) kept as a typed block in a block store.
//! Settings are created on first read, legacy blocks are backfilled, and writes
//! keep the admin UI from outliving the GraphQL API.

// Public exports
pub mod contract;
pub use contract::{
    client::AppSettingsApi, error::AppSettingsError, Actor, AppSettings, AppSettingsValues,
    AuthProvider, UpdateAppSettings,
};

pub mod module;
pub use module::AppSettingsModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
