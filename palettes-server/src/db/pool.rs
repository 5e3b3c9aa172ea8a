//! Connection pool and schema bootstrap
//!
//! The pool is created once at startup and handed to [`PgStore`]; tables are
//! created idempotently by [`migrate`].
//!
//! [`PgStore`]: super::PgStore

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low: the API is a thin mapping layer.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// Palettes reference projects without ON DELETE CASCADE; the store deletes
// palettes before their project.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id   BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS palettes (
        id         BIGSERIAL PRIMARY KEY,
        name       TEXT NOT NULL,
        color1     TEXT NOT NULL,
        color2     TEXT NOT NULL,
        color3     TEXT NOT NULL,
        color4     TEXT NOT NULL,
        color5     TEXT NOT NULL,
        project_id BIGINT NOT NULL REFERENCES projects(id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS palettes_project_id_idx ON palettes (project_id)",
];

/// Create a PostgreSQL connection pool with [`DEFAULT_MAX_CONNECTIONS`].
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/palettes").await?;
/// migrate(&pool).await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool capped at `max_connections`.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Create the `projects` and `palettes` tables if they do not exist.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema bootstrap...");

    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Schema bootstrap complete");
    Ok(())
}
