//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use palettes_server::db::{migrate, seed, MemoryStore};
use palettes_server::http::{run_server, ServerConfig, DEFAULT_PORT};

use crate::config::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides --port)
    #[arg(long, short = 'b', env = "PALETTES_BIND")]
    pub bind: Option<SocketAddr>,

    /// Port to listen on, on all interfaces
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Only accept cross-origin requests from localhost dev servers
    #[arg(long)]
    pub cors_localhost: bool,

    /// Skip creating tables on startup
    #[arg(long)]
    pub skip_migrations: bool,

    /// Serve from a throwaway in-memory store instead of Postgres
    #[arg(long, conflicts_with = "skip_migrations")]
    pub in_memory: bool,

    /// Load fixture projects and palettes before serving
    #[arg(long)]
    pub seed: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl ServeArgs {
    /// `--bind` wins; otherwise listen on every interface at `--port`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], self.port)))
    }
}

/// Run the HTTP server until Ctrl+C/SIGTERM, then release the store.
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind_addr(),
        cors_localhost_only: args.cors_localhost,
    };

    if args.in_memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        let store = Arc::new(MemoryStore::new());
        if args.seed {
            seed(&*store).await.context("Failed to seed store")?;
        }
        return run_server(store, config).await.context("Server error");
    }

    let store = Arc::new(args.database.connect().await?);
    if !args.skip_migrations {
        migrate(store.pool())
            .await
            .context("Failed to create tables")?;
    }
    if args.seed {
        seed(&*store)
            .await
            .context("Failed to seed database")?;
    }

    tracing::info!("Starting palettes server on {}", config.bind_addr);
    let served = run_server(store.clone(), config).await;

    store.close().await;
    tracing::info!("Database pool closed");

    served.context("Server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServeArgs {
        ServeArgs::try_parse_from(std::iter::once("serve").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn port_listens_on_all_interfaces() {
        let args = parse(&["--port", "8080"]);
        assert_eq!(args.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn bind_overrides_port() {
        let args = parse(&["--port", "8080", "--bind", "127.0.0.1:4000"]);
        assert_eq!(args.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 4000)));
    }

    #[test]
    fn cors_is_open_unless_restricted() {
        assert!(!parse(&["--port", "3001"]).cors_localhost);
        assert!(parse(&["--port", "3001", "--cors-localhost"]).cors_localhost);
    }
}
