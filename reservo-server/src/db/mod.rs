//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Pool passed in explicitly, never global
//! - One round trip per repository call
//! - Rely on DB constraints, translate violations - no check-then-insert

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod seed;

pub use sqlx::PgPool;

pub use error::DbError;
pub use pool::{create_lazy_pool, create_pool, create_pool_with_options, PoolConfig};
pub use repos::*;
pub use schema::bootstrap_schema;
pub use seed::{seed_sample_data, Seeded};
