//! Axum server setup
//!
//! Server skeleton with:
//! - Any-origin CORS by default, localhost-only on request
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::PaletteStore;

/// Port used when neither a bind address nor `PORT` is given
pub const DEFAULT_PORT: u16 = 3001;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:3001)
    pub bind_addr: SocketAddr,

    /// Restrict CORS to local dev origins (default: false = any origin)
    pub cors_localhost_only: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            cors_localhost_only: false,
        }
    }
}

/// Shared application state: the single injected store
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn PaletteStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PaletteStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn PaletteStore {
        &*self.store
    }
}

const LOCAL_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:3001",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:3001",
];

fn cors_layer(localhost_only: bool) -> CorsLayer {
    if !localhost_only {
        return CorsLayer::permissive();
    }

    tracing::info!("CORS: restricted to localhost origins");
    CorsLayer::new()
        .allow_origin(LOCAL_ORIGINS.map(HeaderValue::from_static))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the application router: `/health` plus the `/api/v1` resources.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_router())
        .layer(cors_layer(config.cors_localhost_only))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// The store is not closed here; the caller owns its lifecycle.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let store = Arc::new(PgStore::new(pool));
/// run_server(store.clone(), ServerConfig::default()).await?;
/// store.close().await;
/// ```
pub async fn run_server(
    store: Arc<dyn PaletteStore>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let app = build_router(AppState::new(store), &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
