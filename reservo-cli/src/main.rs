//! reservo CLI - restaurant reservation booking service
//!
//! - `reservo serve` (default): reset the schema, seed sample data, serve the API
//! - `reservo bootstrap`: reset the schema (and seed) without serving
//!
//! Settings come from flags, then the environment, then `.env`.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::bootstrap::BootstrapArgs;
use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "reservo",
    author,
    version,
    about = "Restaurant reservation booking API backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reset the schema, seed sample data, and serve the HTTP API
    Serve(ServeArgs),
    /// Drop and recreate the schema, then exit (destroys all data)
    Bootstrap(BootstrapArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so env-backed flags see its values
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })?;
    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }

    match cli.command {
        Some(Commands::Serve(args)) => commands::run_serve(args).await?,
        Some(Commands::Bootstrap(args)) => commands::run_bootstrap(args).await?,
        // Bare `reservo` behaves like `reservo serve`, env vars included
        None => commands::run_serve(ServeArgs::try_parse_from(["serve"])?).await?,
    }

    Ok(())
}
