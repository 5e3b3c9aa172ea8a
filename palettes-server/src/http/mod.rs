//! HTTP server layer
//!
//! Axum server with:
//! - `/api/v1` project and palette resources
//! - CORS (any origin by default)
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError, DEFAULT_PORT};
