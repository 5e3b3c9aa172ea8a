//! In-memory store for tests and `serve --in-memory`
//!
//! Same semantics as the Postgres store, including rejection of palettes
//! whose project does not exist.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{DbError, PaletteStore, Table};
use crate::models::{Name, NewPalette, Palette, Project, ProjectFilter};

#[derive(Default)]
struct Tables {
    projects: BTreeMap<i64, Project>,
    palettes: BTreeMap<i64, Palette>,
    next_project_id: i64,
    next_palette_id: i64,
}

impl Tables {
    fn next_id(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }
}

/// Store backed by ordered maps behind an async lock
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of (project, palette) rows currently stored.
    pub async fn row_counts(&self) -> (usize, usize) {
        let tables = self.tables.read().await;
        (tables.projects.len(), tables.palettes.len())
    }
}

#[async_trait]
impl PaletteStore for MemoryStore {
    async fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, DbError> {
        let tables = self.tables.read().await;
        let projects = tables
            .projects
            .values()
            .filter(|p| filter.name.as_ref().map_or(true, |name| &p.name == name))
            .cloned()
            .collect();
        Ok(projects)
    }

    async fn list_palettes(&self, project_id: i64) -> Result<Vec<Palette>, DbError> {
        let tables = self.tables.read().await;
        let palettes = tables
            .palettes
            .values()
            .filter(|p| p.project_id == project_id)
            .cloned()
            .collect();
        Ok(palettes)
    }

    async fn insert_project(&self, name: &Name) -> Result<i64, DbError> {
        let mut tables = self.tables.write().await;
        let id = Tables::next_id(&mut tables.next_project_id);
        tables.projects.insert(
            id,
            Project {
                id,
                name: name.as_str().to_owned(),
            },
        );
        Ok(id)
    }

    async fn insert_palette(&self, palette: &NewPalette) -> Result<i64, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.projects.contains_key(&palette.project_id) {
            return Err(DbError::ForeignKey {
                project_id: palette.project_id,
            });
        }

        let id = Tables::next_id(&mut tables.next_palette_id);
        tables.palettes.insert(id, palette.clone().with_id(id));
        Ok(id)
    }

    async fn rename_project(&self, id: i64, name: &Name) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        if let Some(project) = tables.projects.get_mut(&id) {
            project.name = name.as_str().to_owned();
        }
        Ok(())
    }

    async fn rename_palette(&self, id: i64, name: &Name) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        if let Some(palette) = tables.palettes.get_mut(&id) {
            palette.name = name.as_str().to_owned();
        }
        Ok(())
    }

    async fn delete_project(&self, id: i64) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        tables.palettes.retain(|_, p| p.project_id != id);
        tables.projects.remove(&id);
        Ok(())
    }

    async fn delete_palette(&self, id: i64) -> Result<(), DbError> {
        self.tables.write().await.palettes.remove(&id);
        Ok(())
    }

    async fn exists(&self, table: Table, id: i64) -> Result<bool, DbError> {
        let tables = self.tables.read().await;
        Ok(match table {
            Table::Projects => tables.projects.contains_key(&id),
            Table::Palettes => tables.palettes.contains_key(&id),
        })
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Name {
        Name::new(Some(s.to_owned())).unwrap()
    }

    fn palette(project_id: i64) -> NewPalette {
        NewPalette {
            name: "palette i".into(),
            color1: "#ffffff".into(),
            color2: "#ff0000".into(),
            color3: "#fff000".into(),
            color4: "#000fff".into(),
            color5: "#0000ff".into(),
            project_id,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_per_table() {
        let store = MemoryStore::new();
        assert_eq!(store.insert_project(&name("a")).await.unwrap(), 1);
        assert_eq!(store.insert_project(&name("b")).await.unwrap(), 2);
        assert_eq!(store.insert_palette(&palette(2)).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn list_projects_filters_by_exact_name() {
        let store = MemoryStore::new();
        store.insert_project(&name("project a")).await.unwrap();
        store.insert_project(&name("project ab")).await.unwrap();

        let filter = ProjectFilter {
            name: Some("project a".into()),
        };
        let found = store.list_projects(&filter).await.unwrap();
        assert_eq!(
            found,
            vec![Project {
                id: 1,
                name: "project a".into()
            }]
        );

        let all = store.list_projects(&ProjectFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn palette_needs_existing_project() {
        let store = MemoryStore::new();
        let err = store.insert_palette(&palette(42)).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKey { project_id: 42 }));
        assert_eq!(store.row_counts().await, (0, 0));
    }

    #[tokio::test]
    async fn rename_missing_row_is_noop() {
        let store = MemoryStore::new();
        let id = store.insert_project(&name("keep")).await.unwrap();
        store.rename_project(id + 1, &name("other")).await.unwrap();
        store.rename_palette(7, &name("other")).await.unwrap();

        let all = store.list_projects(&ProjectFilter::default()).await.unwrap();
        assert_eq!(all[0].name, "keep");
    }

    #[tokio::test]
    async fn delete_project_cascades_to_palettes() {
        let store = MemoryStore::new();
        let keep = store.insert_project(&name("keep")).await.unwrap();
        let gone = store.insert_project(&name("gone")).await.unwrap();
        store.insert_palette(&palette(gone)).await.unwrap();
        store.insert_palette(&palette(gone)).await.unwrap();
        store.insert_palette(&palette(keep)).await.unwrap();

        store.delete_project(gone).await.unwrap();

        assert!(!store.exists(Table::Projects, gone).await.unwrap());
        assert!(store.list_palettes(gone).await.unwrap().is_empty());
        assert_eq!(store.list_palettes(keep).await.unwrap().len(), 1);
        assert_eq!(store.row_counts().await, (1, 1));
    }
}
