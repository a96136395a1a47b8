//! Schema reset command, and the database arguments shared with `serve`

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use reservo_server::db::{
    bootstrap_schema, create_pool_with_options, seed_sample_data, PgPool, PoolConfig,
};

/// Database used when DATABASE_URL is not set
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/acme_reservation_db";

/// Connection settings
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Upper bound on pooled connections
    #[arg(long, env = "RESERVO_MAX_CONNECTIONS", default_value_t = PoolConfig::default().max_connections)]
    pub max_connections: u32,

    /// Seconds a request waits for a free connection before failing
    #[arg(long, env = "RESERVO_ACQUIRE_TIMEOUT_SECS", default_value_t = PoolConfig::default().acquire_timeout.as_secs())]
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseArgs {
    fn default() -> Self {
        let pool = PoolConfig::default();
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            max_connections: pool.max_connections,
            acquire_timeout_secs: pool.acquire_timeout.as_secs(),
        }
    }
}

impl DatabaseArgs {
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }
}

/// Arguments for the bootstrap command
#[derive(Parser, Debug)]
pub struct BootstrapArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Create empty tables only
    #[arg(long)]
    pub no_seed: bool,
}

/// Drop and recreate the schema, then optionally load sample data.
pub async fn prepare_database(pool: &PgPool, seed: bool) -> Result<()> {
    bootstrap_schema(pool)
        .await
        .context("Failed to bootstrap schema")?;

    if seed {
        seed_sample_data(pool)
            .await
            .context("Failed to seed sample data")?;
    }

    Ok(())
}

/// Reset the database and exit
pub async fn run_bootstrap(args: BootstrapArgs) -> Result<()> {
    let pool = create_pool_with_options(&args.database.database_url, args.database.pool_config())
        .await
        .context("Failed to connect to database")?;

    let result = prepare_database(&pool, !args.no_seed).await;
    pool.close().await;
    result?;

    tracing::info!(seeded = !args.no_seed, "Database reset complete");
    Ok(())
}
