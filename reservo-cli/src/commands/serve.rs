//! HTTP server command
//!
//! Connects, resets the schema, seeds sample data, then serves until a
//! shutdown signal.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use reservo_server::db::create_pool_with_options;
use reservo_server::http::{run_server, ServerConfig, DEFAULT_PORT};

use super::bootstrap::{prepare_database, DatabaseArgs};

/// Arguments for the serve command
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Interface to bind to
    #[arg(long, env = "RESERVO_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Skip loading the sample customers and restaurants
    #[arg(long)]
    pub no_seed: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Connecting to database");
    let pool = create_pool_with_options(&args.database.database_url, args.database.pool_config())
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    prepare_database(&pool, !args.no_seed).await?;

    // Run server (blocks until shutdown, closes the pool)
    run_server(pool, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
