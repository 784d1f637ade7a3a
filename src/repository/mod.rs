//! Generic Repository
//!
//! One `Repository<E>` per entity type. Entities describe their table,
//! writable columns, response mapping and event topics through the
//! [`Entity`] trait; the repository turns that into SQL and publishes a
//! notification after every mutation.

mod entity;
mod error;
mod filter;
mod service;

pub use entity::{to_model, to_models, Entity};
pub use error::RepositoryError;
pub use filter::{Filter, FilterOp, FilterValue, Sort, SortOrder};
pub use service::Repository;
