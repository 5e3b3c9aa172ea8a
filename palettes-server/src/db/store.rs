//! Persistence adapter trait
//!
//! Translates validated intents into storage operations. Owns no business
//! rules: existence checks before rename/delete belong to the caller.

use async_trait::async_trait;

use crate::models::{Name, NewPalette, Palette, Project, ProjectFilter};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("palette references missing project {project_id}")]
    ForeignKey { project_id: i64 },
}

/// Tables addressable by [`PaletteStore::exists`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Projects,
    Palettes,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Palettes => "palettes",
        }
    }
}

/// Storage client injected into the HTTP layer
#[async_trait]
pub trait PaletteStore: Send + Sync + 'static {
    /// All projects, or those whose name equals `filter.name`, ordered by id.
    async fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, DbError>;

    /// Palettes owned by `project_id`, ordered by id.
    async fn list_palettes(&self, project_id: i64) -> Result<Vec<Palette>, DbError>;

    /// Insert a project, returning its generated id.
    async fn insert_project(&self, name: &Name) -> Result<i64, DbError>;

    /// Insert a palette, returning its generated id.
    async fn insert_palette(&self, palette: &NewPalette) -> Result<i64, DbError>;

    /// Rename a project. Silently does nothing when `id` is absent.
    async fn rename_project(&self, id: i64, name: &Name) -> Result<(), DbError>;

    /// Rename a palette. Silently does nothing when `id` is absent.
    async fn rename_palette(&self, id: i64, name: &Name) -> Result<(), DbError>;

    /// Delete a project's palettes, then the project itself.
    async fn delete_project(&self, id: i64) -> Result<(), DbError>;

    async fn delete_palette(&self, id: i64) -> Result<(), DbError>;

    async fn exists(&self, table: Table, id: i64) -> Result<bool, DbError>;

    /// Round-trip to the backing storage without touching any rows.
    async fn ping(&self) -> Result<(), DbError>;
}
