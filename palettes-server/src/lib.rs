//! palettes-server: REST backend for projects and their colour palettes
//!
//! Layers, leaves first:
//! - models: request payloads and validation
//! - db: the `PaletteStore` persistence adapter (Postgres and in-memory)
//! - http: handlers, error mapping and the axum server

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryStore, PaletteStore, PgStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
