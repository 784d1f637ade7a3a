//! coop_core Library
//!
//! Tenant-scoped cooperative back-office data layer. Re-exports modules for
//! the server binary and integration tests.

pub mod api;
pub mod config;
pub mod context;
pub mod db;
pub mod error;
pub mod events;
pub mod ledger;
pub mod model;
pub mod repository;
pub mod seed;

pub use config::Config;
pub use context::TenantContext;
pub use error::{AppError, AppResult};
