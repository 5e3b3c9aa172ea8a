//! Postgres-backed store
//!
//! Every statement is parameterized. The cascading project delete runs in a
//! transaction, palettes first.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::store::{DbError, PaletteStore, Table};
use crate::models::{Name, NewPalette, Palette, Project, ProjectFilter};

/// Store over a sqlx connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PaletteStore for PgStore {
    async fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, DbError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name
            FROM projects
            WHERE ($1::TEXT IS NULL OR name = $1)
            ORDER BY id
            "#,
        )
        .bind(filter.name.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn list_palettes(&self, project_id: i64) -> Result<Vec<Palette>, DbError> {
        let palettes = sqlx::query_as::<_, Palette>(
            r#"
            SELECT id, name, color1, color2, color3, color4, color5, project_id
            FROM palettes
            WHERE project_id = $1
            ORDER BY id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(palettes)
    }

    async fn insert_project(&self, name: &Name) -> Result<i64, DbError> {
        let row = sqlx::query("INSERT INTO projects (name) VALUES ($1) RETURNING id")
            .bind(name.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("id"))
    }

    async fn insert_palette(&self, palette: &NewPalette) -> Result<i64, DbError> {
        let row = sqlx::query(
            r#"
            INSERT INTO palettes (name, color1, color2, color3, color4, color5, project_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&palette.name)
        .bind(&palette.color1)
        .bind(&palette.color2)
        .bind(&palette.color3)
        .bind(&palette.color4)
        .bind(&palette.color5)
        .bind(palette.project_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("id"))
    }

    async fn rename_project(&self, id: i64, name: &Name) -> Result<(), DbError> {
        sqlx::query("UPDATE projects SET name = $1 WHERE id = $2")
            .bind(name.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn rename_palette(&self, id: i64, name: &Name) -> Result<(), DbError> {
        sqlx::query("UPDATE palettes SET name = $1 WHERE id = $2")
            .bind(name.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_project(&self, id: i64) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        // Palettes first: the FK has no ON DELETE CASCADE
        let palettes = sqlx::query("DELETE FROM palettes WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            project_id = id,
            palettes = palettes.rows_affected(),
            "project deleted"
        );
        Ok(())
    }

    async fn delete_palette(&self, id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM palettes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists(&self, table: Table, id: i64) -> Result<bool, DbError> {
        // Table names come from a closed enum, never from input
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
            table.as_str()
        );
        let found: (bool,) = sqlx::query_as(&sql).bind(id).fetch_one(&self.pool).await?;
        Ok(found.0)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
