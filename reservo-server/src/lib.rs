//! reservo-server: restaurant reservation booking API
//!
//! Customers and restaurants are registered by name; reservations link the
//! two on a date with a party size. Everything lives in PostgreSQL.
//!
//! - [`db`]: pool, schema bootstrap, sample data, repositories
//! - [`models`]: validated input types
//! - [`http`]: axum router, error mapping, server runner

pub mod db;
pub mod http;
pub mod models;

pub use db::{bootstrap_schema, seed_sample_data, DbError, PoolConfig};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
