//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;
use palettes_server::db::migrate;

use crate::config::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the projects and palettes tables if missing.
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let store = args.database.connect().await?;
    let result = migrate(store.pool()).await;
    store.close().await;

    result.context("Failed to create tables")?;
    println!("Schema is up to date");
    Ok(())
}
