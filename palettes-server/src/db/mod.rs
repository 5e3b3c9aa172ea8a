//! Database layer - store trait, backends, pool and fixtures
//!
//! # Design Principles
//!
//! - One store instance, created at startup and shared as `Arc<dyn PaletteStore>`
//! - Parameterized statements only
//! - Callers check existence before rename/delete; the store never does

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod seed;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options, migrate, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgStore;
pub use seed::{seed, SeedSummary};
pub use store::{DbError, PaletteStore, Table};
