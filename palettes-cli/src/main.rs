//! palettes CLI - REST backend for projects and colour palettes
//!
//! Subcommands:
//! - `serve`: run the HTTP API under `/api/v1`
//! - `migrate`: create the projects and palettes tables
//! - `seed`: replace table contents with fixture data

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "palettes",
    author,
    version,
    about = "REST backend for projects and their colour palettes"
)]
struct Cli {
    /// Debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables if they do not exist
    Migrate(commands::migrate::MigrateArgs),
    /// Replace all projects and palettes with fixture data
    Seed(commands::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Migrate(args) => commands::migrate::run_migrate(args).await,
        Commands::Seed(args) => commands::seed::run_seed(args).await,
    }
}
