//! Environment-driven configuration shared by subcommands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use palettes_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use palettes_server::PgStore;

/// Load `.env` from the working directory or its parents, if present.
///
/// Runs before argument parsing so `env = ...` fallbacks see the values.
/// Variables already set in the environment are not overridden.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Database connection options
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "PALETTES_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub fn url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
    }

    /// Open the pool and wrap it in a store.
    pub async fn connect(&self) -> Result<PgStore> {
        let pool = create_pool_with_options(self.url()?, self.max_connections)
            .await
            .context("Failed to create database pool")?;
        Ok(PgStore::new(pool))
    }
}
