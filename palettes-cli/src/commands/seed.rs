//! Fixture loading command

use anyhow::{Context, Result};
use clap::Parser;
use palettes_server::db::{migrate, seed, SeedSummary};
use palettes_server::PgStore;

use crate::config::DatabaseArgs;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Create tables first if they do not exist
    #[arg(long)]
    pub migrate: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Replace all projects and palettes with the fixture set.
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let store = args.database.connect().await?;
    let result = load_fixtures(&store, args.migrate).await;
    store.close().await;

    let summary = result?;
    println!(
        "Seeded {} projects and {} palettes",
        summary.projects, summary.palettes
    );
    Ok(())
}

async fn load_fixtures(store: &PgStore, migrate_first: bool) -> Result<SeedSummary> {
    if migrate_first {
        migrate(store.pool())
            .await
            .context("Failed to create tables")?;
    }
    seed(store).await.context("Failed to seed database")
}
